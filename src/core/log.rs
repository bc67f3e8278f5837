use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "register" => Colour::Green,
        "del" | "unlog" => Colour::Red,
        "edit" => Colour::Yellow,
        "log" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &mut DbPool, limit: Option<usize>) -> AppResult<Vec<AuditEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(AuditEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if let Some(n) = limit {
            let skip = entries.len().saturating_sub(n);
            entries.drain(..skip);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &mut DbPool, limit: Option<usize>) -> AppResult<()> {
        let entries = Self::load(pool, limit)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut op_target = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            let visible = strip_ansi(&op_target);
            let shown = if visible.chars().count() > MAX_OP_WIDTH {
                let cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                format!("{cut}...")
            } else {
                op_target
            };

            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                shown,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::audit;
    use crate::db::migrate::run_pending_migrations;

    #[test]
    fn limit_keeps_the_most_recent_entries() {
        let mut pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        for i in 0..5 {
            audit(&pool.conn, "log", "habit #1", &format!("entry {i}")).unwrap();
        }

        let last_two = LogLogic::load(&mut pool, Some(2)).unwrap();
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[1].message, "entry 4");
    }
}
