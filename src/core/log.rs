use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per operation family.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "apply" => Colour::Green,
        "withdraw" => Colour::Red,
        "clear" => Colour::Yellow,
        "user_add" | "user_update" | "project_add" => Colour::Cyan,
        "user_del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "import" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, _cfg: &Config) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // collapse op+target into a single column
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        // width of the op column, capped at 40
        let op_width = entries
            .iter()
            .map(|(_, _, _, op, _)| strip_ansi(op).len())
            .max()
            .unwrap_or(0)
            .min(40);

        for (id, date, operation, op_target, message) in &entries {
            let colour = color_for_operation(operation);
            let painted = colour.paint(op_target.clone()).to_string();

            // pad on the stripped width so the color codes don't skew columns
            let pad = op_width.saturating_sub(strip_ansi(&painted).len());

            println!(
                "{:>4}  {}  {}{}  {}",
                id,
                date,
                painted,
                " ".repeat(pad),
                message
            );
        }

        Ok(())
    }
}
