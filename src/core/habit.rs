use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_habit, insert_habit, load_habits_for_user, update_habit};
use crate::errors::{AppError, AppResult};
use crate::models::habit::{Habit, MAX_NAME_LEN, NewHabit};
use crate::models::habit_type::HabitType;
use crate::models::user::User;
use chrono::NaiveDate;

use super::access::owned_habit;
use super::clock::Clock;

fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidName("name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidName(format!(
            "name is longer than {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}

/// High-level business logic for the `habit` commands.
pub struct HabitLogic;

impl HabitLogic {
    /// Create a habit for `user`.
    ///
    /// `since` backdates the creation to midnight of that day in the
    /// clock's zone; it can not be in the future.
    pub fn create(
        pool: &mut DbPool,
        clock: &dyn Clock,
        user: &User,
        name: &str,
        description: Option<&str>,
        habit_type: HabitType,
        since: Option<NaiveDate>,
    ) -> AppResult<Habit> {
        let name = validate_name(name)?;
        let now = clock.now();

        let created_at = match since {
            None => now,
            Some(day) if day > clock.today() => {
                return Err(AppError::InvalidDate(format!("{day} is in the future")));
            }
            Some(day) => clock
                .start_of_day(day)
                .ok_or_else(|| AppError::InvalidDate(day.to_string()))?,
        };

        let new = NewHabit {
            user_id: user.id,
            name,
            description: description.map(str::trim).unwrap_or("").to_string(),
            habit_type,
            created_at,
        };

        let id = insert_habit(&pool.conn, &new)?;
        tracing::debug!(id, habit_type = %new.habit_type, "habit created");

        audit_quiet(
            &pool.conn,
            "add",
            &format!("habit #{id}"),
            &format!("Created {} habit '{}'", new.habit_type, new.name),
        );

        Ok(Habit {
            id,
            user_id: new.user_id,
            name: new.name,
            description: new.description,
            habit_type: new.habit_type,
            created_at: new.created_at,
        })
    }

    /// Only the habits owned by `user`.
    pub fn list(pool: &mut DbPool, user: &User) -> AppResult<Vec<Habit>> {
        load_habits_for_user(&pool.conn, user.id)
    }

    /// Rename or re-describe a habit. The type is immutable.
    pub fn edit(
        pool: &mut DbPool,
        user: &User,
        habit_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Habit> {
        let mut habit = owned_habit(&pool.conn, user, habit_id)?;

        if let Some(n) = name {
            habit.name = validate_name(n)?;
        }
        if let Some(d) = description {
            habit.description = d.trim().to_string();
        }

        update_habit(&pool.conn, habit.id, &habit.name, &habit.description)?;
        audit_quiet(
            &pool.conn,
            "edit",
            &format!("habit #{}", habit.id),
            &format!("Updated habit '{}'", habit.name),
        );

        Ok(habit)
    }

    /// Delete a habit together with its logs.
    pub fn delete(pool: &mut DbPool, user: &User, habit_id: i64) -> AppResult<Habit> {
        let habit = owned_habit(&pool.conn, user, habit_id)?;

        if !delete_habit(&pool.conn, habit.id)? {
            return Err(AppError::HabitNotFound(habit.id));
        }

        audit_quiet(
            &pool.conn,
            "del",
            &format!("habit #{}", habit.id),
            &format!("Deleted habit '{}' and its logs", habit.name),
        );

        Ok(habit)
    }
}
