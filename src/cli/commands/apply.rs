use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::core::calendar::ViewContext;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::LeaveStatus;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Datelike;

/// Apply a status to one day, on the operator's own calendar or on a
/// subordinate's (manager/admin override).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Apply {
        date: date_arg,
        status,
        reason,
        employee,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_arg)
            .ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;

        //
        // 2. Parse status
        //
        let status = LeaveStatus::from_cli_str(status).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}'. Use leave, half-day, holiday or present",
                status
            ))
        })?;

        //
        // 3. Resolve operator and target
        //
        let role = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let (target_id, viewing_subordinate) =
            super::resolve_target(&mut pool, cfg, role, employee.as_deref())?;

        //
        // 4. Reason: explicit, or the mode's default
        //
        let reason_final = match reason {
            Some(r) => r.clone(),
            None if viewing_subordinate => "Manager override".to_string(),
            None => cfg.default_reason.clone(),
        };

        //
        // 5. Execute logic (lock gate included)
        //
        let today = date::today();
        let ctx = ViewContext::new(role, viewing_subordinate, d.year(), d.month());

        ApplyLogic::apply(&mut pool, &ctx, today, &target_id, d, status, &reason_final)?;

        if status.is_present() {
            success(format!("Cleared {} for {}", d, target_id));
        } else {
            success(format!(
                "Applied {} on {} for {}",
                status.to_db_str(),
                d,
                target_id
            ));
        }
    }

    Ok(())
}
