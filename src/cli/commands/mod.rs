pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod habit;
pub mod init;
pub mod log;
pub mod stats;
pub mod track;
pub mod user;

use crate::config::Config;
use crate::core::access::resolve_user;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::User;
use std::io::{self, Write};

/// Open the configured database with an up-to-date schema.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// User the command acts for (`--user` or `current_user`).
pub(crate) fn acting_user(pool: &DbPool, cfg: &Config) -> AppResult<User> {
    resolve_user(&pool.conn, cfg.current_user.as_deref())
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    crate::ui::messages::warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
