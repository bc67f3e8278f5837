use crate::errors::{AppError, AppResult, is_unique_violation};
use crate::models::habit::{Habit, NewHabit};
use crate::models::habit_type::HabitType;
use crate::models::user::User;
use crate::utils::date::DATE_FMT;
use chrono::{DateTime, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

// ---------------------------
// users
// ---------------------------

pub fn map_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        email: row.get("email")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(conn: &Connection, username: &str, email: &str, created_at: &str) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO users (username, email, created_at) VALUES (?1, ?2, ?3)",
        params![username, email, created_at],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => Err(AppError::UserExists(username.to_string())),
        Err(e) => Err(e.into()),
    }
}

pub fn find_user_by_name(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, username, email, created_at FROM users WHERE username = ?1",
            [username],
            map_user,
        )
        .optional()?;
    Ok(user)
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt =
        conn.prepare("SELECT id, username, email, created_at FROM users ORDER BY username ASC")?;
    let rows = stmt.query_map([], map_user)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// habits
// ---------------------------

pub fn map_habit(row: &Row) -> Result<Habit> {
    let type_str: String = row.get("habit_type")?;
    let habit_type = HabitType::from_db_str(&type_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidHabitType(type_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map_err(|_| conversion_error(5, AppError::InvalidDate(created_str.clone())))?;

    Ok(Habit {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        habit_type,
        created_at,
    })
}

pub fn insert_habit(conn: &Connection, h: &NewHabit) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO habits (user_id, name, description, habit_type, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            h.user_id,
            h.name,
            h.description,
            h.habit_type.to_db_str(),
            h.created_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_habit(conn: &Connection, id: i64) -> AppResult<Option<Habit>> {
    let habit = conn
        .query_row(
            "SELECT id, user_id, name, description, habit_type, created_at
             FROM habits WHERE id = ?1",
            [id],
            map_habit,
        )
        .optional()?;
    Ok(habit)
}

pub fn load_habits_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<Habit>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, description, habit_type, created_at
         FROM habits
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([user_id], map_habit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update name and description. The habit type is never changed.
pub fn update_habit(conn: &Connection, id: i64, name: &str, description: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE habits SET name = ?1, description = ?2 WHERE id = ?3",
        params![name, description, id],
    )?;
    Ok(())
}

/// Delete a habit; its logs go with it (ON DELETE CASCADE).
pub fn delete_habit(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM habits WHERE id = ?1", [id])?;
    Ok(n > 0)
}

// ---------------------------
// habit logs
// ---------------------------

/// Insert a log for (habit, date). An existing pair is a conflict.
pub fn insert_log(conn: &Connection, habit_id: i64, date: &NaiveDate) -> AppResult<i64> {
    let date_str = date.format(DATE_FMT).to_string();

    let res = conn.execute(
        "INSERT INTO habit_logs (habit_id, log_date) VALUES (?1, ?2)",
        params![habit_id, date_str],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateLog {
            habit_id,
            date: date_str,
        }),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_log(conn: &Connection, habit_id: i64, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM habit_logs WHERE habit_id = ?1 AND log_date = ?2",
        params![habit_id, date.format(DATE_FMT).to_string()],
    )?;
    Ok(n > 0)
}

/// All log dates of a habit, ascending.
pub fn load_log_dates(conn: &Connection, habit_id: i64) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare_cached(
        "SELECT log_date FROM habit_logs
         WHERE habit_id = ?1
         ORDER BY log_date ASC",
    )?;

    let rows = stmt.query_map([habit_id], |row| {
        let s: String = row.get(0)?;
        NaiveDate::parse_from_str(&s, DATE_FMT)
            .map_err(|_| conversion_error(0, AppError::InvalidDate(s.clone())))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::pool::DbPool;

    fn setup() -> (DbPool, i64) {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        let uid = insert_user(&pool.conn, "ada", "", "2025-01-01T00:00:00+00:00").unwrap();
        (pool, uid)
    }

    fn new_habit(user_id: i64, ty: HabitType) -> NewHabit {
        NewHabit {
            user_id,
            name: "Read".into(),
            description: String::new(),
            habit_type: ty,
            created_at: DateTime::parse_from_rfc3339("2025-01-01T08:00:00+01:00").unwrap(),
        }
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let (pool, _) = setup();
        let err = insert_user(&pool.conn, "ada", "", "now").unwrap_err();
        assert!(matches!(err, AppError::UserExists(name) if name == "ada"));
    }

    #[test]
    fn habit_round_trips_through_the_table() {
        let (pool, uid) = setup();
        let id = insert_habit(&pool.conn, &new_habit(uid, HabitType::Quit)).unwrap();

        let h = load_habit(&pool.conn, id).unwrap().unwrap();
        assert_eq!(h.user_id, uid);
        assert_eq!(h.habit_type, HabitType::Quit);
        assert_eq!(h.created_at.to_rfc3339(), "2025-01-01T08:00:00+01:00");
        assert!(load_habit(&pool.conn, id + 1).unwrap().is_none());
    }

    #[test]
    fn duplicate_log_is_rejected_not_duplicated() {
        let (pool, uid) = setup();
        let id = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();

        insert_log(&pool.conn, id, &d("2025-02-01")).unwrap();
        let err = insert_log(&pool.conn, id, &d("2025-02-01")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateLog { habit_id, .. } if habit_id == id));

        assert_eq!(load_log_dates(&pool.conn, id).unwrap().len(), 1);
    }

    #[test]
    fn same_date_on_two_habits_is_fine() {
        let (pool, uid) = setup();
        let a = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();
        let b = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();

        insert_log(&pool.conn, a, &d("2025-02-01")).unwrap();
        insert_log(&pool.conn, b, &d("2025-02-01")).unwrap();
    }

    #[test]
    fn log_dates_come_back_sorted() {
        let (pool, uid) = setup();
        let id = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();
        for s in ["2025-02-03", "2025-01-30", "2025-02-01"] {
            insert_log(&pool.conn, id, &d(s)).unwrap();
        }

        let dates = load_log_dates(&pool.conn, id).unwrap();
        assert_eq!(dates, vec![d("2025-01-30"), d("2025-02-01"), d("2025-02-03")]);
    }

    #[test]
    fn deleting_a_habit_cascades_to_logs() {
        let (pool, uid) = setup();
        let id = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();
        insert_log(&pool.conn, id, &d("2025-02-01")).unwrap();

        assert!(delete_habit(&pool.conn, id).unwrap());

        let left: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM habit_logs", [], |r| r.get(0))
            .unwrap();
        assert_eq!(left, 0);
    }

    #[test]
    fn unknown_stored_type_is_an_error() {
        let (pool, uid) = setup();
        let id = insert_habit(&pool.conn, &new_habit(uid, HabitType::Build)).unwrap();

        // bypass the CHECK constraint to simulate a corrupted row
        pool.conn
            .execute_batch("PRAGMA ignore_check_constraints = ON;")
            .unwrap();
        pool.conn
            .execute("UPDATE habits SET habit_type = 'MAYBE' WHERE id = ?1", [id])
            .unwrap();

        assert!(load_habit(&pool.conn, id).is_err());
    }
}
