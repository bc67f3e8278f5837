use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::user::UserLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

use super::open_db;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let mut pool = open_db(cfg)?;

        match action {
            UserAction::Register { username, email } => {
                let user = UserLogic::register(&mut pool, clock, username, email.as_deref())?;
                success(format!("User '{}' registered (id {}).", user.username, user.id));

                if cfg.current_user.is_none() {
                    info(format!(
                        "Set `current_user: {}` in {} or pass --user {} to act as this user.",
                        user.username,
                        Config::config_file().display(),
                        user.username
                    ));
                }
            }
            UserAction::List => {
                let users = UserLogic::list(&mut pool)?;
                if users.is_empty() {
                    info("No users registered yet.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![Column::right("ID"), Column::left("Username"), Column::left("Email")],
                    &cfg.separator_char,
                );
                for u in users {
                    table.add_row(vec![u.id.to_string(), u.username, u.email]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
