//! Who is asking, and may they touch this habit?
//!
//! Every habit-scoped command goes through [`owned_habit`] before any log
//! or streak is read.

use crate::db::queries::{find_user_by_name, load_habit};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::user::User;
use rusqlite::Connection;

/// Resolve the acting user from `--user` / `current_user`.
pub fn resolve_user(conn: &Connection, username: Option<&str>) -> AppResult<User> {
    let name = username
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::NoCurrentUser)?;

    find_user_by_name(conn, name)?.ok_or_else(|| AppError::UserNotFound(name.to_string()))
}

pub fn require_owner(user: &User, habit: &Habit) -> AppResult<()> {
    if habit.user_id != user.id {
        tracing::warn!(user = %user.username, habit = habit.id, "ownership check failed");
        return Err(AppError::PermissionDenied(habit.id));
    }
    Ok(())
}

/// Load a habit and check that `user` owns it.
///
/// A missing habit is `HabitNotFound`; someone else's habit is
/// `PermissionDenied`.
pub fn owned_habit(conn: &Connection, user: &User, habit_id: i64) -> AppResult<Habit> {
    let habit = load_habit(conn, habit_id)?.ok_or(AppError::HabitNotFound(habit_id))?;
    require_owner(user, &habit)?;
    Ok(habit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::pool::DbPool;
    use crate::db::queries::{insert_habit, insert_user};
    use crate::models::habit::NewHabit;
    use crate::models::habit_type::HabitType;
    use chrono::DateTime;

    fn setup() -> (DbPool, i64) {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        let ada = insert_user(&pool.conn, "ada", "", "now").unwrap();
        insert_user(&pool.conn, "bob", "", "now").unwrap();

        let habit = insert_habit(
            &pool.conn,
            &NewHabit {
                user_id: ada,
                name: "Walk".into(),
                description: String::new(),
                habit_type: HabitType::Build,
                created_at: DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00").unwrap(),
            },
        )
        .unwrap();
        (pool, habit)
    }

    #[test]
    fn missing_user_is_reported() {
        let (pool, _) = setup();
        assert!(matches!(resolve_user(&pool.conn, None), Err(AppError::NoCurrentUser)));
        assert!(matches!(resolve_user(&pool.conn, Some("  ")), Err(AppError::NoCurrentUser)));
        assert!(matches!(
            resolve_user(&pool.conn, Some("carol")),
            Err(AppError::UserNotFound(_))
        ));
    }

    #[test]
    fn owner_gets_the_habit() {
        let (pool, habit) = setup();
        let ada = resolve_user(&pool.conn, Some("ada")).unwrap();
        assert_eq!(owned_habit(&pool.conn, &ada, habit).unwrap().id, habit);
    }

    #[test]
    fn other_user_is_denied_not_missing() {
        let (pool, habit) = setup();
        let bob = resolve_user(&pool.conn, Some("bob")).unwrap();

        assert!(matches!(
            owned_habit(&pool.conn, &bob, habit),
            Err(AppError::PermissionDenied(id)) if id == habit
        ));
        assert!(matches!(
            owned_habit(&pool.conn, &bob, habit + 100),
            Err(AppError::HabitNotFound(_))
        ));
    }
}
