use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_streak, paint};

use super::{acting_user, open_db};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Stats { id, json } = cmd {
        let mut pool = open_db(cfg)?;
        let user = acting_user(&pool, cfg)?;

        let s = StatsLogic::stats(&mut pool, clock, &user, *id)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&s)?);
            return Ok(());
        }

        let color = color_for_streak(s.current_streak, s.longest_streak);
        println!("#{} {} ({})", s.habit_id, s.name, s.habit_type);
        println!("current_streak: {}", paint(&s.current_streak.to_string(), color));
        println!("longest_streak: {}", s.longest_streak);
    }

    Ok(())
}
