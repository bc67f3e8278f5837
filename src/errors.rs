//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid habit type: {0} (expected BUILD or QUIT)")]
    InvalidHabitType(String),

    #[error("Invalid habit name: {0}")]
    InvalidName(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid UTC offset: {0} (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),

    // ---------------------------
    // Users / access
    // ---------------------------
    #[error("No current user: pass --user <name> or set `current_user` in the configuration")]
    NoCurrentUser,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Permission denied: habit {0} belongs to another user")]
    PermissionDenied(i64),

    // ---------------------------
    // Habits / logs
    // ---------------------------
    #[error("Habit not found: {0}")]
    HabitNotFound(i64),

    #[error("Habit {habit_id} is already logged on {date}")]
    DuplicateLog { habit_id: i64, date: String },

    #[error("No log for habit {habit_id} on {date}")]
    LogNotFound { habit_id: i64, date: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// True when a rusqlite error is a UNIQUE constraint violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
