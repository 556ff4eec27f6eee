mod common;
use chrono::Datelike;
use common::{init_db, init_db_with_org, lvl, setup_test_db};
use predicates::prelude::*;

/// A date inside the current month (always editable, any role).
fn current_month_date(day: u32) -> String {
    let t = chrono::Local::now().date_naive();
    format!("{}-{:02}-{:02}", t.year(), t.month(), day)
}

fn current_month_period() -> String {
    let t = chrono::Local::now().date_naive();
    format!("{}-{:02}", t.year(), t.month())
}

#[test]
fn test_apply_leave_in_current_month() {
    let db_path = setup_test_db("apply_current_month");
    init_db(&db_path);

    let date = current_month_date(10);

    lvl()
        .args([
            "--db", &db_path, "--me", "E0002", "apply", &date, "--status", "leave", "--reason",
            "Family",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied LEAVE"));

    lvl()
        .args([
            "--db",
            &db_path,
            "--me",
            "E0002",
            "list",
            "--period",
            &current_month_period(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(&date))
        .stdout(predicate::str::contains("LEAVE"))
        .stdout(predicate::str::contains("Family"));
}

#[test]
fn test_apply_past_month_locked_for_employee() {
    let db_path = setup_test_db("apply_locked_employee");
    init_db(&db_path);

    lvl()
        .args(["--db", &db_path, "apply", "2020-01-15", "--status", "leave"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Edit locked"));

    // nothing must reach the database
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
        .expect("count records");
    assert_eq!(count, 0);
}

#[test]
fn test_manager_override_unlocks_past_month() {
    let db_path = setup_test_db("manager_override");
    init_db_with_org(&db_path);

    // manager editing a subordinate's closed month: allowed
    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "--me", "E0001", "apply", "2020-01-15",
            "--status", "leave", "--employee", "E0002",
        ])
        .assert()
        .success();

    // manager editing their own closed month: locked
    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "--me", "E0001", "apply", "2020-01-16",
            "--status", "leave",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Edit locked"));
}

#[test]
fn test_admin_edits_own_history() {
    let db_path = setup_test_db("admin_history");
    init_db(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "apply", "2020-02-03", "--status", "holiday",
        ])
        .assert()
        .success();
}

#[test]
fn test_employee_cannot_target_others() {
    let db_path = setup_test_db("employee_no_override");
    init_db_with_org(&db_path);

    lvl()
        .args([
            "--db",
            &db_path,
            "apply",
            &current_month_date(12),
            "--status",
            "leave",
            "--employee",
            "E0002",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not permitted"));
}

#[test]
fn test_withdraw_is_a_soft_delete() {
    let db_path = setup_test_db("withdraw_soft");
    init_db(&db_path);

    let date = current_month_date(11);

    lvl()
        .args(["--db", &db_path, "apply", &date, "--status", "leave"])
        .assert()
        .success();

    lvl()
        .args(["--db", &db_path, "withdraw", &date])
        .assert()
        .success();

    // gone from the active view
    lvl()
        .args([
            "--db",
            &db_path,
            "list",
            "--period",
            &current_month_period(),
            "--upcoming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(&date).not());

    // but the row is still there, flagged
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let withdrawn: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM records WHERE date = ?1 AND withdrawn = 1",
            [&date],
            |row| row.get(0),
        )
        .expect("count withdrawn");
    assert_eq!(withdrawn, 1);
}

#[test]
fn test_apply_present_clears_the_day() {
    let db_path = setup_test_db("present_clears");
    init_db(&db_path);

    let date = current_month_date(13);

    lvl()
        .args(["--db", &db_path, "apply", &date, "--status", "leave"])
        .assert()
        .success();

    lvl()
        .args(["--db", &db_path, "apply", &date, "--status", "present"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    lvl()
        .args([
            "--db",
            &db_path,
            "list",
            "--period",
            &current_month_period(),
            "--upcoming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(&date).not());
}

#[test]
fn test_withdraw_without_records_fails() {
    let db_path = setup_test_db("withdraw_empty");
    init_db(&db_path);

    lvl()
        .args(["--db", &db_path, "withdraw", &current_month_date(20)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active records"));
}

#[test]
fn test_calendar_shows_lock_notice_for_past_month() {
    let db_path = setup_test_db("calendar_lock_notice");
    init_db(&db_path);

    lvl()
        .args(["--db", &db_path, "calendar", "--period", "2020-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("read-only"));

    // admin sees the same month unlocked
    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "calendar", "--period", "2020-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("read-only").not());
}
