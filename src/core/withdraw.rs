use crate::core::apply::ApplyLogic;
use crate::core::calendar::ViewContext;
use crate::db::log::lvlog;
use crate::db::pool::DbPool;
use crate::db::queries::withdraw_active;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct WithdrawLogic;

impl WithdrawLogic {
    /// Soft-delete the active record(s) on one day. The rows stay in the
    /// database flagged `withdrawn = 1` and disappear from active views.
    pub fn withdraw(
        pool: &mut DbPool,
        ctx: &ViewContext,
        today: NaiveDate,
        target_id: &str,
        date: NaiveDate,
    ) -> AppResult<()> {
        ApplyLogic::ensure_editable(pool, ctx, today, target_id, date)?;

        let n = withdraw_active(&pool.conn, target_id, &date)?;
        if n == 0 {
            return Err(AppError::NoRecordsForDate(date.to_string()));
        }

        lvlog(
            &pool.conn,
            "withdraw",
            target_id,
            &format!("Withdrew {} record(s) on {}", n, date),
        )?;

        Ok(())
    }
}
