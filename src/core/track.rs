use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log, insert_log};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::habit_log::HabitLog;
use crate::models::user::User;
use crate::utils::date::format_date;
use chrono::NaiveDate;

use super::access::owned_habit;

/// Logging (and un-logging) of days for a habit.
pub struct TrackLogic;

impl TrackLogic {
    /// Record `date` for the habit. A second log for the same day fails
    /// with `DuplicateLog`.
    pub fn add(pool: &mut DbPool, user: &User, habit_id: i64, date: NaiveDate) -> AppResult<(Habit, HabitLog)> {
        let habit = owned_habit(&pool.conn, user, habit_id)?;
        let id = insert_log(&pool.conn, habit.id, &date)?;

        let what = if habit.habit_type.is_quit() { "relapse" } else { "done" };
        audit_quiet(
            &pool.conn,
            "log",
            &format!("habit #{}", habit.id),
            &format!("Logged {} on {}", what, format_date(&date)),
        );

        let log = HabitLog {
            id,
            habit_id: habit.id,
            log_date: date,
        };
        Ok((habit, log))
    }

    pub fn remove(pool: &mut DbPool, user: &User, habit_id: i64, date: NaiveDate) -> AppResult<Habit> {
        let habit = owned_habit(&pool.conn, user, habit_id)?;

        if !delete_log(&pool.conn, habit.id, &date)? {
            return Err(AppError::LogNotFound {
                habit_id: habit.id,
                date: format_date(&date),
            });
        }

        audit_quiet(
            &pool.conn,
            "unlog",
            &format!("habit #{}", habit.id),
            &format!("Removed log on {}", format_date(&date)),
        );

        Ok(habit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{Clock, FixedClock};
    use crate::core::habit::HabitLogic;
    use crate::core::user::UserLogic;
    use crate::db::migrate::run_pending_migrations;
    use crate::models::habit_type::HabitType;

    fn setup() -> (DbPool, User, User, i64, NaiveDate) {
        let mut pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(), None);

        let ada = UserLogic::register(&mut pool, &clock, "ada", None).unwrap();
        let bob = UserLogic::register(&mut pool, &clock, "bob", None).unwrap();
        let habit = HabitLogic::create(&mut pool, &clock, &ada, "Read", None, HabitType::Build, None).unwrap();
        (pool, ada, bob, habit.id, clock.today())
    }

    #[test]
    fn logging_twice_is_a_conflict() {
        let (mut pool, ada, _, habit, today) = setup();

        TrackLogic::add(&mut pool, &ada, habit, today).unwrap();
        let err = TrackLogic::add(&mut pool, &ada, habit, today).unwrap_err();
        assert!(matches!(err, AppError::DuplicateLog { .. }));
    }

    #[test]
    fn others_can_not_log_my_habit() {
        let (mut pool, _, bob, habit, today) = setup();
        let err = TrackLogic::add(&mut pool, &bob, habit, today).unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }

    #[test]
    fn removing_a_missing_log_fails() {
        let (mut pool, ada, _, habit, today) = setup();
        let err = TrackLogic::remove(&mut pool, &ada, habit, today).unwrap_err();
        assert!(matches!(err, AppError::LogNotFound { .. }));

        TrackLogic::add(&mut pool, &ada, habit, today).unwrap();
        TrackLogic::remove(&mut pool, &ada, habit, today).unwrap();
        // can be logged again afterwards
        TrackLogic::add(&mut pool, &ada, habit, today).unwrap();
    }
}
