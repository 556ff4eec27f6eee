use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `records` table with the modern schema (including `source`).
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            date         TEXT NOT NULL,
            status       TEXT NOT NULL CHECK(status IN ('PRESENT','LEAVE','HALF_DAY','HOLIDAY')),
            reason       TEXT DEFAULT '',
            withdrawn    INTEGER NOT NULL DEFAULT 0,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_emp_date ON records(employee_id, date);
        CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
        "#,
    )?;
    Ok(())
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL UNIQUE,
            first_name   TEXT NOT NULL,
            last_name    TEXT NOT NULL,
            email        TEXT NOT NULL DEFAULT '',
            role         TEXT NOT NULL DEFAULT 'EMPLOYEE' CHECK(role IN ('ADMIN','MANAGER','EMPLOYEE')),
            project_id   TEXT NOT NULL DEFAULT '',
            manager_id   TEXT NOT NULL DEFAULT '',
            joining_date TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn create_projects_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   TEXT NOT NULL UNIQUE,
            project_name TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Migrate an old `records` table to include the `source` column.
/// Databases created before 0.2 stored only manually entered rows.
fn migrate_add_source_to_records(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "records")? {
        return Ok(());
    }

    if table_has_column(conn, "records", "source")? {
        return Ok(());
    }

    warning("Adding 'source' column to records table...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE records RENAME TO records_old;

        CREATE TABLE records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            date         TEXT NOT NULL,
            status       TEXT NOT NULL CHECK(status IN ('PRESENT','LEAVE','HALF_DAY','HOLIDAY')),
            reason       TEXT DEFAULT '',
            withdrawn    INTEGER NOT NULL DEFAULT 0,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        INSERT INTO records (id, employee_id, date, status, reason, withdrawn, created_at)
            SELECT id, employee_id, date, status, reason, withdrawn, created_at
            FROM records_old;

        DROP TABLE records_old;

        CREATE INDEX IF NOT EXISTS idx_records_emp_date ON records(employee_id, date);
        CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )?;

    crate::db::log::lvlog(
        conn,
        "migration_applied",
        "records",
        "Added 'source' column to records table",
    )
    .ok();

    Ok(())
}

/// Run every pending migration. Safe to call on every startup:
/// each step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_records_table(conn)?;
    create_employees_table(conn)?;
    create_projects_table(conn)?;
    migrate_add_source_to_records(conn)?;
    Ok(())
}
