use crate::core::store::DriverStore;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "toggle" => Colour::Green,
        "update" => Colour::Yellow,
        "alert_send" => Colour::Red,
        "alert_ack" => Colour::Blue,
        "alert_resolve" => Colour::Purple,
        "seed" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn entries(store: &DriverStore) -> AppResult<Vec<LogEntry>> {
        let mut stmt = store.conn().prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LogEntry {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(store: &DriverStore) -> AppResult<()> {
        let entries = Self::entries(store)?;

        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| e.date.clone());
            let label = format!("{:<op_w$}", op_target(e), op_w = op_w);

            println!(
                "{:>id_w$}  {}  {}  {}",
                e.id,
                date,
                color_for_operation(&e.operation).paint(label),
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
