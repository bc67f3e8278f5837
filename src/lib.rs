//! rHabit library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::{AppError, AppResult};
use clap::Parser;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => crate::cli::commands::init::handle(cli),
        Commands::Config { .. } => crate::cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => crate::cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => crate::cli::commands::log::handle(&cli.command, cfg),
        Commands::User { .. } => crate::cli::commands::user::handle(&cli.command, cfg, clock),
        Commands::Habit { .. } => crate::cli::commands::habit::handle(&cli.command, cfg, clock),
        Commands::Track { .. } => crate::cli::commands::track::handle(&cli.command, cfg, clock),
        Commands::Stats { .. } => crate::cli::commands::stats::handle(&cli.command, cfg, clock),
        Commands::Dashboard { .. } => crate::cli::commands::dashboard::handle(&cli.command, cfg, clock),
        Commands::Export { .. } => crate::cli::commands::export::handle(&cli.command, cfg, clock),
    }
}

/// Build the clock: pinned by `--today`, otherwise the wall clock in the
/// configured zone.
pub fn make_clock(cli: &Cli, cfg: &Config) -> AppResult<Box<dyn Clock>> {
    let offset = cfg.offset()?;

    match &cli.today {
        Some(s) => {
            let day = crate::utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            Ok(Box::new(FixedClock::new(day, offset)))
        }
        None => Ok(Box::new(SystemClock::new(offset))),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = crate::utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(user) = &cli.user {
        cfg.current_user = Some(user.clone());
    }

    let clock = make_clock(&cli, &cfg)?;
    tracing::debug!(database = %cfg.database, today = %clock.today(), "starting");

    dispatch(&cli, &cfg, clock.as_ref())
}
