use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::find_project;
use crate::errors::{AppError, AppResult};
use crate::export::write_report;
use crate::utils::date;
use chrono::Datelike;

/// Produce the monthly attendance report (manager/admin only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        format,
        file,
        month,
        project,
        force,
    } = cmd
    {
        let role = super::operator_role(cfg)?;
        if !role.can_target_others() {
            return Err(AppError::Forbidden(
                "reports are available to managers and admins only".into(),
            ));
        }

        let (year, m) = match month {
            Some(p) => {
                date::parse_month(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?
            }
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(p) = project
            && find_project(&mut pool, p)?.is_none()
        {
            return Err(AppError::UnknownProject(p.clone()));
        }

        let rows = ReportLogic::build(&mut pool, year, m, project.as_deref())?;

        write_report(&rows, format.clone(), file, *force)?;
    }

    Ok(())
}
