use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarDay, CalendarProjector, ViewContext};
use crate::db::pool::DbPool;
use crate::db::queries::load_records_in_range;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::formatting::{bold, dim};
use chrono::Datelike;

const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render the month grid for the operator or a subordinate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { period, employee } = cmd {
        //
        // 1. Resolve month to display
        //
        let (year, month) = match period {
            Some(p) => {
                date::parse_month(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?
            }
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        //
        // 2. Resolve operator and target
        //
        let role = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let (target_id, viewing_subordinate) =
            super::resolve_target(&mut pool, cfg, role, employee.as_deref())?;

        //
        // 3. Load the month's records and project
        //
        let (start, end) = date::month_bounds(year, month);
        let records = load_records_in_range(&mut pool, &target_id, &start, &end)?;

        let ctx = ViewContext::new(role, viewing_subordinate, year, month);
        let today = date::today();
        let grid = CalendarProjector::project(&ctx, today, &records);

        //
        // 4. Render
        //
        println!();
        println!("  {} [{}]", bold(&date::month_label(year, month)), target_id);
        println!();

        print_grid(&grid, cfg);

        let locked = grid.iter().any(|d| d.is_locked);
        if locked {
            println!();
            warning("🔒 Past month: read-only for your role.");
        }

        print_day_details(&grid);
        println!();
        println!("  L = Leave   H = Half day   O = Optional holiday");
    }

    Ok(())
}

fn print_grid(grid: &[CalendarDay], cfg: &Config) {
    for name in WEEK_DAYS {
        print!(" {:>3}", name);
    }
    println!();

    for (i, cell) in grid.iter().enumerate() {
        let text = match cell.day {
            None => "    ".to_string(),
            Some(day) => {
                let glyph = cell
                    .records
                    .iter()
                    .map(|r| r.status.glyph())
                    .find(|c| *c != ' ')
                    .unwrap_or(' ');
                format!(" {:>2}{}", day, glyph)
            }
        };

        if cell.is_weekend && cfg.show_weekend {
            print!("{}", dim(&text));
        } else {
            print!("{}", text);
        }

        if (i + 1) % 7 == 0 {
            println!();
        }
    }
    if grid.len() % 7 != 0 {
        println!();
    }
}

fn print_day_details(grid: &[CalendarDay]) {
    let annotated: Vec<&CalendarDay> = grid.iter().filter(|d| !d.records.is_empty()).collect();
    if annotated.is_empty() {
        return;
    }

    println!();
    for day in annotated {
        for rec in &day.records {
            let (label, color) = crate::utils::describe_status(rec.status.to_db_str());
            println!(
                "  {}  {}{:<16}\x1b[0m  {}",
                day.date_key, color, label, rec.reason
            );
        }
    }
}
