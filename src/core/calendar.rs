//! Calendar projection and edit-authorization policy.
//!
//! Pure, stateless computation: given a month, today's date, an
//! authorization context and a snapshot of attendance records, produce the
//! day-by-day grid with an edit-lock flag. No I/O and no error conditions:
//! an empty record set just yields a grid with no annotations.

use crate::models::record::AttendanceRecord;
use crate::models::role::Role;
use crate::utils::date::{days_in_month, first_weekday_offset};
use chrono::{Datelike, NaiveDate};

/// Who is looking at which month. Built by the caller per invocation;
/// nothing here is read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub role: Role,
    /// True when a manager/admin is inspecting an employee's calendar
    /// rather than their own.
    pub viewing_subordinate: bool,
    pub month: u32, // 1..=12
    pub year: i32,
}

impl ViewContext {
    pub fn new(role: Role, viewing_subordinate: bool, year: i32, month: u32) -> Self {
        Self {
            role,
            viewing_subordinate,
            month,
            year,
        }
    }
}

/// One cell of the 7-column grid. `day == None` marks a leading empty slot
/// used to align the 1st of the month to its weekday column.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub day: Option<u32>,
    pub date_key: String,
    pub records: Vec<AttendanceRecord>,
    pub is_weekend: bool,
    pub is_locked: bool,
}

impl CalendarDay {
    fn slot() -> Self {
        Self {
            day: None,
            date_key: String::new(),
            records: Vec::new(),
            is_weekend: false,
            is_locked: false,
        }
    }
}

pub struct CalendarProjector;

impl CalendarProjector {
    /// Role table deciding who may edit days of an already-closed month.
    ///
    /// | role     | viewing subordinate | can edit history |
    /// |----------|---------------------|------------------|
    /// | ADMIN    | any                 | yes              |
    /// | MANAGER  | yes                 | yes              |
    /// | MANAGER  | no                  | no               |
    /// | EMPLOYEE | any                 | no               |
    pub fn can_edit_history(role: Role, viewing_subordinate: bool) -> bool {
        match role {
            Role::Admin => true,
            Role::Manager => viewing_subordinate,
            Role::Employee => false,
        }
    }

    /// The viewed month lies strictly before today's month.
    pub fn is_past_month(ctx: &ViewContext, today: NaiveDate) -> bool {
        ctx.year < today.year() || (ctx.year == today.year() && ctx.month < today.month())
    }

    /// Lock policy for the whole projection. Month-granular on purpose:
    /// every day of the displayed month carries the same flag, so a day
    /// that already passed inside the current month stays editable.
    pub fn month_locked(ctx: &ViewContext, today: NaiveDate) -> bool {
        Self::is_past_month(ctx, today)
            && !Self::can_edit_history(ctx.role, ctx.viewing_subordinate)
    }

    /// Build the grid: leading empty slots up to the 1st's weekday column
    /// (Sunday-first), then one cell per day of the month with its
    /// non-withdrawn records attached.
    pub fn project(
        ctx: &ViewContext,
        today: NaiveDate,
        records: &[AttendanceRecord],
    ) -> Vec<CalendarDay> {
        let locked = Self::month_locked(ctx, today);

        let offset = first_weekday_offset(ctx.year, ctx.month);
        let n_days = days_in_month(ctx.year, ctx.month);

        let mut grid = Vec::with_capacity((offset + n_days) as usize);

        for _ in 0..offset {
            grid.push(CalendarDay::slot());
        }

        for day in 1..=n_days {
            let date = NaiveDate::from_ymd_opt(ctx.year, ctx.month, day).unwrap();

            let daily: Vec<AttendanceRecord> = records
                .iter()
                .filter(|r| !r.withdrawn && r.date == date)
                .cloned()
                .collect();

            let dow = date.weekday().num_days_from_sunday();

            grid.push(CalendarDay {
                day: Some(day),
                date_key: date.format("%Y-%m-%d").to_string(),
                records: daily,
                is_weekend: dow == 0 || dow == 6,
                is_locked: locked,
            });
        }

        grid
    }

    /// Gate for any mutating action (apply/withdraw/override). Empty slots
    /// and locked days are never editable. Callers must consult this before
    /// dispatching a write.
    pub fn authorize_edit(day: &CalendarDay) -> bool {
        day.day.is_some() && !day.is_locked
    }
}
