// src/export/logic.rs

use crate::core::clock::Clock;
use crate::core::stats::{HabitDetail, streaks_for};
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_habits_for_user;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, HabitExport};
use crate::models::user::User;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Collect the user's habits with streaks and logs.
    pub fn collect(pool: &mut DbPool, clock: &dyn Clock, user: &User) -> AppResult<Vec<HabitExport>> {
        let habits = load_habits_for_user(&pool.conn, user.id)?;

        let mut out: Vec<HabitExport> = Vec::with_capacity(habits.len());
        for habit in habits {
            let (logs, stats) = streaks_for(&pool.conn, clock, &habit)?;
            out.push(HabitDetail { habit, stats, logs }.into());
        }
        Ok(out)
    }

    /// Export every habit of `user` to `file`.
    pub fn export(
        pool: &mut DbPool,
        clock: &dyn Clock,
        user: &User,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let habits = Self::collect(pool, clock, user)?;
        if habits.is_empty() {
            warning("No habits to export.");
        }

        match format {
            ExportFormat::Json => export_json(&habits, &path)?,
            ExportFormat::Csv => export_csv(&habits, &path)?,
        }

        audit_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} habits to {}", habits.len(), path.display()),
        );

        Ok(habits.len())
    }
}
