// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{HabitExport, HabitExportRow, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(habits: &[HabitExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(habits)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header written by serde from the first row).
pub(crate) fn export_csv(habits: &[HabitExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for h in habits {
        wtr.serialize(HabitExportRow::from(h))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
