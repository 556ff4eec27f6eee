//! Date shapes accepted at the import boundary.
//!
//! Timeline payloads produced by other attendance tools are loose about the
//! date field: it may arrive as an ISO date-time string, a plain
//! `"YYYY-MM-DD"` string, or a 3-element `[year, month, day]` array.
//! Everything is funnelled through [`RawDate::normalize`] before it can
//! reach storage or the calendar projector; anything unrecognized degrades
//! to an empty key, which matches no calendar day.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Text(String),
    Parts(Vec<i64>),
    Other(serde_json::Value),
}

impl RawDate {
    /// Canonical `YYYY-MM-DD` key, or `""` on any malformed input.
    pub fn normalize(&self) -> String {
        match self.to_naive() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }

    /// Validated date, `None` on any malformed input.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        match self {
            RawDate::Text(s) => {
                // "2024-03-05T00:00:00" → keep the date part only
                let date_part = s.split('T').next().unwrap_or("");
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
            }
            RawDate::Parts(parts) => {
                if parts.len() != 3 {
                    return None;
                }
                let year = i32::try_from(parts[0]).ok()?;
                let month = u32::try_from(parts[1]).ok()?;
                let day = u32::try_from(parts[2]).ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            }
            RawDate::Other(_) => None,
        }
    }
}

/// Normalization over an optional field (absent/null → `""`).
pub fn normalize_opt(date: Option<&RawDate>) -> String {
    date.map(RawDate::normalize).unwrap_or_default()
}
