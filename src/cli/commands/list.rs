use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_records_in_range;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

/// List leave records for a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        upcoming,
        withdrawn,
        employee,
    } = cmd
    {
        let role = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let (target_id, _) = super::resolve_target(&mut pool, cfg, role, employee.as_deref())?;

        let (start, end) = resolve_period(period)?;
        let records = load_records_in_range(&mut pool, &target_id, &start, &end)?;

        let shown: Vec<&AttendanceRecord> = records
            .iter()
            .filter(|r| {
                if *upcoming {
                    r.is_active_leave()
                } else {
                    *withdrawn || !r.withdrawn
                }
            })
            .collect();

        if shown.is_empty() {
            println!("No records for {} in {} → {}", target_id, start, end);
            return Ok(());
        }

        print_records(&target_id, &shown);
    }

    Ok(())
}

fn resolve_period(
    period: &Option<String>,
) -> AppResult<(chrono::NaiveDate, chrono::NaiveDate)> {
    use crate::utils::date::period_bounds;

    if let Some(p) = period {
        if p == "all" {
            // wide open bounds, the query clamps to stored rows anyway
            let start = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let end = chrono::NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
            return Ok((start, end));
        }

        return period_bounds(p).map_err(AppError::InvalidPeriod);
    }

    let today = date::today();
    Ok(date::month_bounds(today.year(), today.month()))
}

fn print_records(target_id: &str, records: &[&AttendanceRecord]) {
    println!("\nRecords for {}:", target_id);

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("STATUS", 9),
        Column::new("REASON", 12),
        Column::new("STATE", 9),
        Column::new("SOURCE", 6),
    ]);

    for rec in records {
        table.add_row(vec![
            rec.date_key(),
            rec.status.to_db_str().to_string(),
            rec.reason.clone(),
            if rec.withdrawn {
                "withdrawn".to_string()
            } else {
                "active".to_string()
            },
            rec.source.clone(),
        ]);
    }

    print!("{}", table.render());
}
