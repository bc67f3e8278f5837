use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::{acting_user, open_db};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = open_db(cfg)?;
        let user = acting_user(&pool, cfg)?;
        ExportLogic::export(&mut pool, clock, &user, *format, file, *force)?;
    }
    Ok(())
}
