use crate::core::calendar::{CalendarProjector, ViewContext};
use crate::db::log::lvlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, load_records_in_range, withdraw_active};
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::status::LeaveStatus;
use crate::utils::date::month_bounds;
use chrono::{Datelike, NaiveDate};

pub struct ApplyLogic;

impl ApplyLogic {
    /// Apply a status to one day of `target_id`'s calendar.
    ///
    /// The projector's lock gate runs first: the record's month is
    /// projected for the given context and the edit is refused when the
    /// day is locked. Applying `PRESENT` clears the day (withdraws the
    /// active records) instead of inserting a new row.
    pub fn apply(
        pool: &mut DbPool,
        ctx: &ViewContext,
        today: NaiveDate,
        target_id: &str,
        date: NaiveDate,
        status: LeaveStatus,
        reason: &str,
    ) -> AppResult<()> {
        Self::ensure_editable(pool, ctx, today, target_id, date)?;

        if status.is_present() {
            // "Cancel" semantics: reset the day to plain presence.
            let n = withdraw_active(&pool.conn, target_id, &date)?;
            if n == 0 {
                return Err(AppError::NoRecordsForDate(date.to_string()));
            }
            lvlog(
                &pool.conn,
                "clear",
                target_id,
                &format!("Cleared {} record(s) on {}", n, date),
            )?;
            return Ok(());
        }

        let rec = AttendanceRecord::new(0, target_id, date, status, reason);
        insert_record(&pool.conn, &rec)?;

        lvlog(
            &pool.conn,
            "apply",
            target_id,
            &format!("Applied {} on {}", status.to_db_str(), date),
        )?;

        Ok(())
    }

    /// Project the month containing `date` and run the authorization gate
    /// on the day's cell.
    pub(crate) fn ensure_editable(
        pool: &mut DbPool,
        ctx: &ViewContext,
        today: NaiveDate,
        target_id: &str,
        date: NaiveDate,
    ) -> AppResult<()> {
        let (start, end) = month_bounds(date.year(), date.month());
        let records = load_records_in_range(pool, target_id, &start, &end)?;

        let month_ctx = ViewContext {
            year: date.year(),
            month: date.month(),
            ..*ctx
        };

        let grid = CalendarProjector::project(&month_ctx, today, &records);

        let day = grid
            .iter()
            .find(|d| d.day == Some(date.day()))
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        if !CalendarProjector::authorize_edit(day) {
            return Err(AppError::EditLocked(format!(
                "{} is in a closed month for your role",
                date
            )));
        }

        Ok(())
    }
}
