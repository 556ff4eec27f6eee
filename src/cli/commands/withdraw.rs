use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::ViewContext;
use crate::core::withdraw::WithdrawLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Datelike;

/// Withdraw (soft-delete) the active record(s) of one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Withdraw {
        date: date_arg,
        employee,
    } = cmd
    {
        let d = date::parse_date(date_arg)
            .ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;

        let role = super::operator_role(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let (target_id, viewing_subordinate) =
            super::resolve_target(&mut pool, cfg, role, employee.as_deref())?;

        let today = date::today();
        let ctx = ViewContext::new(role, viewing_subordinate, d.year(), d.month());

        WithdrawLogic::withdraw(&mut pool, &ctx, today, &target_id, d)?;

        success(format!("Withdrew record(s) on {} for {}", d, target_id));
    }

    Ok(())
}
