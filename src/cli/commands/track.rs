use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::track::TrackLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_date, parse_day};

use super::{acting_user, open_db};

/// Log or un-log a day for a habit.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Track { id, date, remove } = cmd {
        let day = match date {
            Some(s) => parse_day(s, clock.today())?,
            None => clock.today(),
        };

        let mut pool = open_db(cfg)?;
        let user = acting_user(&pool, cfg)?;

        if *remove {
            let habit = TrackLogic::remove(&mut pool, &user, *id, day)?;
            success(format!("Removed log of '{}' on {}.", habit.name, format_date(&day)));
        } else {
            let (habit, log) = TrackLogic::add(&mut pool, &user, *id, day)?;
            let what = if habit.habit_type.is_quit() {
                "relapse"
            } else {
                "done"
            };
            success(format!(
                "Logged '{}' as {} on {} (entry #{}).",
                habit.name,
                what,
                format_date(&log.log_date),
                log.id
            ));
        }
    }

    Ok(())
}
