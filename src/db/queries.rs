use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::project::Project;
use crate::models::record::AttendanceRecord;
use crate::models::role::Role;
use crate::models::status::LeaveStatus;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

// ---------------------------------------------------------------------------
// records
// ---------------------------------------------------------------------------

pub fn map_record_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = LeaveStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        status,
        reason: row.get::<_, Option<String>>("reason")?.unwrap_or_default(),
        withdrawn: row.get::<_, i32>("withdrawn")? == 1,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_record(conn: &Connection, rec: &AttendanceRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO records (employee_id, date, status, reason, withdrawn, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.employee_id,
            rec.date_key(),
            rec.status.to_db_str(),
            rec.reason,
            if rec.withdrawn { 1 } else { 0 },
            rec.source,
            rec.created_at,
        ],
    )?;
    Ok(())
}

/// Soft-delete every active record on the given day.
/// Returns the number of rows flagged.
pub fn withdraw_active(conn: &Connection, employee_id: &str, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE records SET withdrawn = 1
         WHERE employee_id = ?1 AND date = ?2 AND withdrawn = 0",
        params![employee_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

/// Full history for one employee, oldest first. Withdrawn rows included:
/// the caller decides what an "active" view means.
pub fn load_timeline(pool: &mut DbPool, employee_id: &str) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM records
         WHERE employee_id = ?1
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map([employee_id], map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_records_in_range(
    pool: &mut DbPool,
    employee_id: &str,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM records
         WHERE employee_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_record_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Active (non-withdrawn, non-PRESENT) records in a date range, joined with
/// the owning employee. Used by the monthly report.
pub fn load_active_with_employees(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
    project: Option<&str>,
) -> AppResult<Vec<(AttendanceRecord, Employee)>> {
    let base = "SELECT r.id AS r_id, r.employee_id AS r_employee_id, r.date AS r_date,
                       r.status AS r_status, r.reason AS r_reason, r.withdrawn AS r_withdrawn,
                       r.source AS r_source, r.created_at AS r_created_at,
                       e.id AS e_id, e.employee_id AS e_employee_id, e.first_name, e.last_name,
                       e.email, e.role, e.project_id, e.manager_id, e.joining_date
                FROM records r
                JOIN employees e ON e.employee_id = r.employee_id
                WHERE r.date BETWEEN ?1 AND ?2
                  AND r.withdrawn = 0
                  AND r.status != 'PRESENT'";

    let start_s = start.format("%Y-%m-%d").to_string();
    let end_s = end.format("%Y-%m-%d").to_string();

    let mut out = Vec::new();

    if let Some(p) = project {
        let sql = format!("{base} AND e.project_id = ?3 ORDER BY e.employee_id, r.date");
        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![start_s, end_s, p], map_joined_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let sql = format!("{base} ORDER BY e.employee_id, r.date");
        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![start_s, end_s], map_joined_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

fn map_joined_row(row: &Row) -> Result<(AttendanceRecord, Employee)> {
    let date_str: String = row.get("r_date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("r_status")?;
    let status = LeaveStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    let record = AttendanceRecord {
        id: row.get("r_id")?,
        employee_id: row.get("r_employee_id")?,
        date,
        status,
        reason: row.get::<_, Option<String>>("r_reason")?.unwrap_or_default(),
        withdrawn: row.get::<_, i32>("r_withdrawn")? == 1,
        source: row.get("r_source")?,
        created_at: row.get("r_created_at")?,
    };

    let employee = Employee {
        id: row.get("e_id")?,
        employee_id: row.get("e_employee_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        role: map_role(row.get::<_, String>("role")?)?,
        project_id: row.get("project_id")?,
        manager_id: row.get("manager_id")?,
        joining_date: row.get("joining_date")?,
    };

    Ok((record, employee))
}

// ---------------------------------------------------------------------------
// employees
// ---------------------------------------------------------------------------

fn map_role(s: String) -> Result<Role> {
    Role::from_db_str(&s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(s)),
        )
    })
}

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        role: map_role(row.get::<_, String>("role")?)?,
        project_id: row.get("project_id")?,
        manager_id: row.get("manager_id")?,
        joining_date: row.get("joining_date")?,
    })
}

pub fn insert_employee(conn: &Connection, e: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (employee_id, first_name, last_name, email, role, project_id, manager_id, joining_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            e.employee_id,
            e.first_name,
            e.last_name,
            e.email,
            e.role.to_db_str(),
            e.project_id,
            e.manager_id,
            e.joining_date,
        ],
    )?;
    Ok(())
}

pub fn update_employee(conn: &Connection, e: &Employee) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE employees
         SET first_name = ?2, last_name = ?3, email = ?4, role = ?5,
             project_id = ?6, manager_id = ?7, joining_date = ?8
         WHERE employee_id = ?1",
        params![
            e.employee_id,
            e.first_name,
            e.last_name,
            e.email,
            e.role.to_db_str(),
            e.project_id,
            e.manager_id,
            e.joining_date,
        ],
    )?;
    Ok(n)
}

pub fn delete_employee(conn: &Connection, employee_id: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM employees WHERE employee_id = ?1",
        [employee_id],
    )?;
    Ok(n)
}

pub fn load_employees(pool: &mut DbPool) -> AppResult<Vec<Employee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM employees ORDER BY employee_id ASC")?;

    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_employee(pool: &mut DbPool, employee_id: &str) -> AppResult<Option<Employee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM employees WHERE employee_id = ?1")?;

    let mut rows = stmt.query_map([employee_id], map_employee_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub fn map_project_row(row: &Row) -> Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        project_name: row.get("project_name")?,
    })
}

pub fn insert_project(conn: &Connection, p: &Project) -> AppResult<()> {
    conn.execute(
        "INSERT INTO projects (project_id, project_name) VALUES (?1, ?2)",
        params![p.project_id, p.project_name],
    )?;
    Ok(())
}

pub fn load_projects(pool: &mut DbPool) -> AppResult<Vec<Project>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM projects ORDER BY project_id ASC")?;

    let rows = stmt.query_map([], map_project_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_project(pool: &mut DbPool, project_id: &str) -> AppResult<Option<Project>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM projects WHERE project_id = ?1")?;

    let mut rows = stmt.query_map([project_id], map_project_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}
