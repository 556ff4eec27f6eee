use serde::Serialize;

/// Flat row of the monthly report.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub employee_id: String,
    pub name: String,
    pub project_id: String,
    pub date: String,
    pub status: String,
    pub reason: String,
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee_id",
        "name",
        "project_id",
        "date",
        "status",
        "reason",
    ]
}

pub(crate) fn row_to_cells(r: &ReportRow) -> Vec<String> {
    vec![
        r.employee_id.clone(),
        r.name.clone(),
        r.project_id.clone(),
        r.date.clone(),
        r.status.clone(),
        r.reason.clone(),
    ]
}
