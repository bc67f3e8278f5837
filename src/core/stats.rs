//! Glue between storage and the streak calculator: stats, detail and
//! dashboard views for the acting user.

use crate::db::pool::DbPool;
use crate::db::queries::{load_habits_for_user, load_log_dates};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;
use crate::models::streak::StreakStats;
use crate::models::user::User;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use super::access::owned_habit;
use super::calculator::compute_streaks;
use super::clock::Clock;

/// `stats` output.
#[derive(Debug, Clone, Serialize)]
pub struct HabitStats {
    pub habit_id: i64,
    pub name: String,
    pub habit_type: HabitType,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// `habit show` output: the habit, its streaks and every logged day.
#[derive(Debug, Clone, Serialize)]
pub struct HabitDetail {
    #[serde(flatten)]
    pub habit: Habit,
    #[serde(flatten)]
    pub stats: StreakStats,
    pub logs: Vec<NaiveDate>,
}

/// One `dashboard` row.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow {
    pub id: i64,
    pub name: String,
    pub habit_type: HabitType,
    pub current_streak: u32,
}

/// Log dates (ascending) and streaks of a habit already access-checked.
pub fn streaks_for(
    conn: &Connection,
    clock: &dyn Clock,
    habit: &Habit,
) -> AppResult<(Vec<NaiveDate>, StreakStats)> {
    let dates = load_log_dates(conn, habit.id)?;
    let created_on = clock.date_of(&habit.created_at);
    let stats = compute_streaks(habit.habit_type, created_on, &dates, clock.today());

    tracing::debug!(
        habit = habit.id,
        logs = dates.len(),
        current = stats.current_streak,
        longest = stats.longest_streak,
        "streaks computed"
    );
    Ok((dates, stats))
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn stats(pool: &mut DbPool, clock: &dyn Clock, user: &User, habit_id: i64) -> AppResult<HabitStats> {
        let habit = owned_habit(&pool.conn, user, habit_id)?;
        let (_, s) = streaks_for(&pool.conn, clock, &habit)?;

        Ok(HabitStats {
            habit_id: habit.id,
            name: habit.name,
            habit_type: habit.habit_type,
            current_streak: s.current_streak,
            longest_streak: s.longest_streak,
        })
    }

    pub fn detail(pool: &mut DbPool, clock: &dyn Clock, user: &User, habit_id: i64) -> AppResult<HabitDetail> {
        let habit = owned_habit(&pool.conn, user, habit_id)?;
        let (logs, stats) = streaks_for(&pool.conn, clock, &habit)?;
        Ok(HabitDetail { habit, stats, logs })
    }

    pub fn dashboard(pool: &mut DbPool, clock: &dyn Clock, user: &User) -> AppResult<Vec<DashboardRow>> {
        let habits = load_habits_for_user(&pool.conn, user.id)?;

        let mut rows = Vec::with_capacity(habits.len());
        for habit in habits {
            let (_, s) = streaks_for(&pool.conn, clock, &habit)?;
            rows.push(DashboardRow {
                id: habit.id,
                name: habit.name,
                habit_type: habit.habit_type,
                current_streak: s.current_streak,
            });
        }
        Ok(rows)
    }
}
