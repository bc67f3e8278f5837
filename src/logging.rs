use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// `RHABIT_LOG` takes precedence over `RUST_LOG`; without either only
/// warnings are shown so command output stays clean.
pub fn init_tracing() {
    let filter = std::env::var("RHABIT_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
