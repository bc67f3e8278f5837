// src/export/model.rs

use crate::core::stats::HabitDetail;
use crate::models::habit_type::HabitType;
use chrono::NaiveDate;
use serde::Serialize;

/// Full habit record for JSON export, log dates included.
#[derive(Serialize, Clone, Debug)]
pub struct HabitExport {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub habit_type: HabitType,
    pub created_at: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub logs: Vec<NaiveDate>,
}

/// Flat row for CSV export: log dates are summarized, not listed.
#[derive(Serialize, Clone, Debug)]
pub struct HabitExportRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub habit_type: HabitType,
    pub created_at: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub log_count: usize,
    pub last_log: String,
}

impl From<HabitDetail> for HabitExport {
    fn from(d: HabitDetail) -> Self {
        Self {
            id: d.habit.id,
            created_at: d.habit.created_at_str(),
            name: d.habit.name,
            description: d.habit.description,
            habit_type: d.habit.habit_type,
            current_streak: d.stats.current_streak,
            longest_streak: d.stats.longest_streak,
            logs: d.logs,
        }
    }
}

impl From<&HabitExport> for HabitExportRow {
    fn from(h: &HabitExport) -> Self {
        Self {
            id: h.id,
            name: h.name.clone(),
            description: h.description.clone(),
            habit_type: h.habit_type,
            created_at: h.created_at.clone(),
            current_streak: h.current_streak,
            longest_streak: h.longest_streak,
            log_count: h.logs.len(),
            last_log: h.logs.last().map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}
