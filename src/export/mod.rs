mod fs_utils;
mod json_csv;
pub mod model;
mod xlsx;

pub use model::ReportRow;

use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::io;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write the report rows in the requested format.
pub fn write_report(
    rows: &[ReportRow],
    format: ReportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = crate::utils::path::expand_tilde(file);

    if !path.is_absolute() {
        return Err(crate::errors::AppError::from(io::Error::other(format!(
            "Output file path must be absolute: {file}"
        ))));
    }

    fs_utils::ensure_writable(&path, force)?;

    if rows.is_empty() {
        warning("No records found for the selected month.");
    }

    match format {
        ReportFormat::Csv => json_csv::export_csv(rows, &path)?,
        ReportFormat::Json => json_csv::export_json(rows, &path)?,
        ReportFormat::Xlsx => xlsx::export_xlsx(rows, &path)?,
    }

    Ok(())
}
