use super::status::LeaveStatus;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One attendance/leave entry for a single employee and calendar day.
/// Withdrawal is a soft flag: the row stays in the database and is simply
/// excluded from active views.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i32,
    pub employee_id: String,  // ⇔ records.employee_id (TEXT)
    pub date: NaiveDate,      // ⇔ records.date (TEXT "YYYY-MM-DD")
    pub status: LeaveStatus,  // ⇔ records.status ('PRESENT'|'LEAVE'|'HALF_DAY'|'HOLIDAY')
    pub reason: String,       // ⇔ records.reason (TEXT, default '')
    pub withdrawn: bool,      // ⇔ records.withdrawn (INT 0/1)
    pub source: String,       // ⇔ records.source (TEXT, default 'cli')
    pub created_at: String,   // ⇔ records.created_at (TEXT, ISO8601)
}

impl AttendanceRecord {
    /// High-level constructor for records created from the CLI.
    /// - `withdrawn = false`
    /// - `source = "cli"`
    /// - `created_at = now() in ISO8601`
    pub fn new(
        id: i32,
        employee_id: &str,
        date: NaiveDate,
        status: LeaveStatus,
        reason: &str,
    ) -> Self {
        Self {
            id,
            employee_id: employee_id.to_string(),
            date,
            status,
            reason: reason.to_string(),
            withdrawn: false,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Active leave = not withdrawn and not a plain PRESENT marker.
    /// This is what "upcoming leaves" style views show.
    pub fn is_active_leave(&self) -> bool {
        !self.withdrawn && !self.status.is_present()
    }
}
