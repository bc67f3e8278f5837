use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, GREEN, paint};
use crate::utils::date::format_date;
use crate::utils::table::{Column, Table};

use super::{acting_user, open_db};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Dashboard { json } = cmd {
        let mut pool = open_db(cfg)?;
        let user = acting_user(&pool, cfg)?;

        let rows = StatsLogic::dashboard(&mut pool, clock, &user)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            info(format!("No habits yet for '{}'.", user.username));
            return Ok(());
        }

        header(format!(
            "🔥 Streaks for {} on {}",
            user.username,
            format_date(&clock.today())
        ));

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("Habit"),
                Column::left("Type"),
                Column::right("Current"),
            ],
            &cfg.separator_char,
        );
        for r in rows {
            let color = if r.current_streak > 0 { GREEN } else { GREY };
            table.add_row(vec![
                r.id.to_string(),
                r.name,
                r.habit_type.to_string(),
                paint(&r.current_streak.to_string(), color),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
