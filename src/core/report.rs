use crate::db::pool::DbPool;
use crate::db::queries::load_active_with_employees;
use crate::errors::AppResult;
use crate::export::model::ReportRow;
use crate::utils::date::month_bounds;

pub struct ReportLogic;

impl ReportLogic {
    /// Rows of the monthly report: one per active leave record in the
    /// month, joined with the owning employee, optionally filtered to a
    /// single project.
    pub fn build(
        pool: &mut DbPool,
        year: i32,
        month: u32,
        project: Option<&str>,
    ) -> AppResult<Vec<ReportRow>> {
        let (start, end) = month_bounds(year, month);

        let joined = load_active_with_employees(pool, &start, &end, project)?;

        Ok(joined
            .into_iter()
            .map(|(rec, emp)| ReportRow {
                employee_id: emp.employee_id.clone(),
                name: emp.full_name(),
                project_id: emp.project_id,
                date: rec.date_key(),
                status: rec.status.to_db_str().to_string(),
                reason: rec.reason,
            })
            .collect())
    }
}
