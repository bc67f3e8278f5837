pub mod habit;
pub mod habit_log;
pub mod habit_type;
pub mod streak;
pub mod user;
