use serde::Serialize;

/// Status of a single attendance day.
/// `Present` is the neutral state and doubles as "cleared/cancelled"
/// when applied over an existing leave.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LeaveStatus {
    Present,
    Leave,
    HalfDay,
    Holiday,
}

impl LeaveStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveStatus::Present => "PRESENT",
            LeaveStatus::Leave => "LEAVE",
            LeaveStatus::HalfDay => "HALF_DAY",
            LeaveStatus::Holiday => "HOLIDAY",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PRESENT" => Some(LeaveStatus::Present),
            "LEAVE" => Some(LeaveStatus::Leave),
            "HALF_DAY" => Some(LeaveStatus::HalfDay),
            "HOLIDAY" => Some(LeaveStatus::Holiday),
            _ => None,
        }
    }

    /// Lenient parser for CLI input ("leave", "half-day", "HALF_DAY", ...).
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "PRESENT" | "CLEAR" | "CANCEL" => Some(LeaveStatus::Present),
            "LEAVE" => Some(LeaveStatus::Leave),
            "HALF_DAY" | "HALFDAY" => Some(LeaveStatus::HalfDay),
            "HOLIDAY" | "OPTIONAL_HOLIDAY" => Some(LeaveStatus::Holiday),
            _ => None,
        }
    }

    /// One-letter glyph used in the calendar grid.
    pub fn glyph(&self) -> char {
        match self {
            LeaveStatus::Present => ' ',
            LeaveStatus::Leave => 'L',
            LeaveStatus::HalfDay => 'H',
            LeaveStatus::Holiday => 'O',
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, LeaveStatus::Present)
    }
}
