use super::habit_type::HabitType;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Habit {
    pub id: i64,
    pub user_id: i64,                     // ⇔ habits.user_id (FK users, cascade)
    pub name: String,                     // ⇔ habits.name (max 200 chars)
    pub description: String,              // ⇔ habits.description (may be empty)
    pub habit_type: HabitType,            // ⇔ habits.habit_type ('BUILD' | 'QUIT')
    pub created_at: DateTime<FixedOffset>, // ⇔ habits.created_at (TEXT, RFC3339)
}

/// Longest accepted habit name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Values for a habit that does not exist yet.
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub habit_type: HabitType,
    pub created_at: DateTime<FixedOffset>,
}

impl Habit {
    pub fn created_at_str(&self) -> String {
        self.created_at.to_rfc3339()
    }
}
