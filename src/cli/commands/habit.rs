use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::habit::HabitLogic;
use crate::core::stats::{HabitDetail, StatsLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_streak, color_for_type, paint};
use crate::utils::date::{format_date, parse_day};
use crate::utils::table::{Column, Table};

use super::{acting_user, ask_confirmation, open_db};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let Commands::Habit { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_db(cfg)?;
    let user = acting_user(&pool, cfg)?;

    match action {
        HabitAction::Add {
            name,
            habit_type,
            description,
            since,
        } => {
            let since = since
                .as_deref()
                .map(|s| parse_day(s, clock.today()))
                .transpose()?;

            let habit = HabitLogic::create(
                &mut pool,
                clock,
                &user,
                name,
                description.as_deref(),
                *habit_type,
                since,
            )?;
            success(format!(
                "Created {} habit #{} '{}' (since {}).",
                habit.habit_type,
                habit.id,
                habit.name,
                format_date(&clock.date_of(&habit.created_at))
            ));
        }

        HabitAction::List { json } => {
            let habits = HabitLogic::list(&mut pool, &user)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
                return Ok(());
            }

            if habits.is_empty() {
                info(format!("No habits yet for '{}'.", user.username));
                return Ok(());
            }

            let mut table = Table::new(
                vec![
                    Column::right("ID"),
                    Column::left("Name"),
                    Column::left("Type"),
                    Column::left("Since"),
                    Column::left("Description"),
                ],
                &cfg.separator_char,
            );
            for h in habits {
                table.add_row(vec![
                    h.id.to_string(),
                    h.name.clone(),
                    paint(h.habit_type.to_db_str(), color_for_type(h.habit_type.is_quit())),
                    format_date(&clock.date_of(&h.created_at)),
                    h.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        HabitAction::Show { id, json } => {
            let detail = StatsLogic::detail(&mut pool, clock, &user, *id)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                print_detail(&detail, clock);
            }
        }

        HabitAction::Edit {
            id,
            name,
            description,
        } => {
            if name.is_none() && description.is_none() {
                info("Nothing to change: pass --name and/or --description.");
                return Ok(());
            }
            let habit = HabitLogic::edit(&mut pool, &user, *id, name.as_deref(), description.as_deref())?;
            success(format!("Habit #{} updated: '{}'.", habit.id, habit.name));
        }

        HabitAction::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete habit #{} and ALL of its logs? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let habit = HabitLogic::delete(&mut pool, &user, *id)?;
            success(format!("Habit #{} '{}' has been deleted.", habit.id, habit.name));
        }
    }

    Ok(())
}

fn print_detail(d: &HabitDetail, clock: &dyn Clock) {
    let h = &d.habit;
    let streak_color = color_for_streak(d.stats.current_streak, d.stats.longest_streak);

    println!("\n=== #{} {} ===", h.id, h.name);
    println!(
        "Type:           {}",
        paint(h.habit_type.to_db_str(), color_for_type(h.habit_type.is_quit()))
    );
    if !h.description.is_empty() {
        println!("Description:    {}", h.description);
    }
    println!("Since:          {}", format_date(&clock.date_of(&h.created_at)));
    println!(
        "Current streak: {}",
        paint(&d.stats.current_streak.to_string(), streak_color)
    );
    println!("Longest streak: {}", d.stats.longest_streak);

    let label = if h.habit_type.is_quit() { "Relapses" } else { "Logged days" };
    if d.logs.is_empty() {
        println!("{label}:    none");
    } else {
        println!("{label} ({}):", d.logs.len());
        for day in &d.logs {
            println!("  - {}", format_date(day));
        }
    }
}
