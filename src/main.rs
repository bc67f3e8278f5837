//! rHabit main entrypoint.

use rhabit::run;

fn main() {
    rhabit::logging::init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
