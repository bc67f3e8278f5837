use chrono::NaiveDate;
use serde::Serialize;

/// One day on which a habit was performed (BUILD) or relapsed (QUIT).
#[derive(Debug, Clone, Serialize)]
pub struct HabitLog {
    pub id: i64,
    pub habit_id: i64,
    pub log_date: NaiveDate, // ⇔ habit_logs.log_date (TEXT "YYYY-MM-DD")
}
