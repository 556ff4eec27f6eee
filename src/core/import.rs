use crate::core::apply::ApplyLogic;
use crate::core::calendar::ViewContext;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::raw_date::RawDate;
use crate::models::status::LeaveStatus;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry of a bulk timeline file. Shapes are loose on purpose: this is
/// the boundary where foreign payloads get validated, so every field is
/// optional and the date accepts all the known wire forms.
#[derive(Debug, Deserialize)]
pub struct ImportEntry {
    #[serde(default)]
    pub date: Option<RawDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub applied: usize,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import a JSON array of `{date, status, reason?}` entries and apply
    /// each valid one through the normal apply path (lock policy included).
    ///
    /// Malformed entries are skipped with a warning, never fatal. A lock
    /// violation aborts the batch: it means the whole file targets a month
    /// the operator may not touch.
    pub fn import(
        pool: &mut DbPool,
        ctx: &ViewContext,
        today: NaiveDate,
        target_id: &str,
        file: &Path,
        default_reason: &str,
    ) -> AppResult<ImportOutcome> {
        let content = fs::read_to_string(file)?;

        let entries: Vec<ImportEntry> = serde_json::from_str(&content)
            .map_err(|e| AppError::Import(format!("{}: {}", file.display(), e)))?;

        let mut outcome = ImportOutcome::default();

        for (i, entry) in entries.iter().enumerate() {
            let date = match entry.date.as_ref().and_then(RawDate::to_naive) {
                Some(d) => d,
                None => {
                    warning(format!("Entry {}: unrecognized date, skipped", i + 1));
                    outcome.skipped += 1;
                    continue;
                }
            };

            let status = match entry.status.as_deref().and_then(LeaveStatus::from_cli_str) {
                Some(s) => s,
                None => {
                    warning(format!(
                        "Entry {}: unknown status '{}', skipped",
                        i + 1,
                        entry.status.as_deref().unwrap_or("")
                    ));
                    outcome.skipped += 1;
                    continue;
                }
            };

            if status.is_present() {
                // nothing to record for plain presence
                outcome.skipped += 1;
                continue;
            }

            let reason = entry.reason.as_deref().unwrap_or(default_reason);

            ApplyLogic::apply(pool, ctx, today, target_id, date, status, reason)?;
            outcome.applied += 1;
        }

        Ok(outcome)
    }
}
