mod common;
use common::{init_db_with_org, lvl, seed_march_2024_leaves, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

/// Extend the base org with a second project and employee, so the project
/// filter has something to exclude.
fn seed_second_project(db_path: &str) {
    lvl()
        .args([
            "--db", db_path, "--as", "admin", "project", "--add", "--id", "P002", "--name",
            "Zephyr",
        ])
        .assert()
        .success();

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "user", "--add", "--id", "E0003", "--first",
            "Dora", "--last", "Neri", "--project", "P002",
        ])
        .assert()
        .success();

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "apply", "2024-03-18", "--status", "leave",
            "--employee", "E0003",
        ])
        .assert()
        .success();
}

#[test]
fn test_report_csv_contains_active_records() {
    let db_path = setup_test_db("report_csv");
    init_db_with_org(&db_path);
    seed_march_2024_leaves(&db_path);

    let out = temp_out("report_csv", "csv");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "csv", "--file", &out,
            "--month", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report csv");
    assert!(content.contains("2024-03-05"));
    assert!(content.contains("LEAVE"));
    assert!(content.contains("2024-03-12"));
    assert!(content.contains("HALF_DAY"));
    assert!(content.contains("Bruno Bianchi"));
}

#[test]
fn test_report_respects_project_filter() {
    let db_path = setup_test_db("report_project_filter");
    init_db_with_org(&db_path);
    seed_march_2024_leaves(&db_path);
    seed_second_project(&db_path);

    let out = temp_out("report_project_filter", "csv");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "csv", "--file", &out,
            "--month", "2024-03", "--project", "P001",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report csv");
    assert!(content.contains("Bruno Bianchi"));
    assert!(!content.contains("Dora Neri"));
}

#[test]
fn test_report_excludes_withdrawn_records() {
    let db_path = setup_test_db("report_withdrawn");
    init_db_with_org(&db_path);
    seed_march_2024_leaves(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "withdraw", "2024-03-05", "--employee", "E0002",
        ])
        .assert()
        .success();

    let out = temp_out("report_withdrawn", "csv");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "csv", "--file", &out,
            "--month", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report csv");
    assert!(!content.contains("2024-03-05"));
    assert!(content.contains("2024-03-12"));
}

#[test]
fn test_report_json_format() {
    let db_path = setup_test_db("report_json");
    init_db_with_org(&db_path);
    seed_march_2024_leaves(&db_path);

    let out = temp_out("report_json", "json");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "json", "--file", &out,
            "--month", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report json");
    assert!(content.contains("\"date\": \"2024-03-05\""));
    assert!(content.contains("\"employee_id\": \"E0002\""));
}

#[test]
fn test_report_xlsx_creates_file() {
    let db_path = setup_test_db("report_xlsx");
    init_db_with_org(&db_path);
    seed_march_2024_leaves(&db_path);

    let out = temp_out("report_xlsx", "xlsx");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "xlsx", "--file", &out,
            "--month", "2024-03",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_report_forbidden_for_employees() {
    let db_path = setup_test_db("report_forbidden");
    init_db_with_org(&db_path);

    let out = temp_out("report_forbidden", "csv");

    lvl()
        .args([
            "--db", &db_path, "report", "--format", "csv", "--file", &out, "--month", "2024-03",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not permitted"));
}

#[test]
fn test_report_unknown_project_fails() {
    let db_path = setup_test_db("report_unknown_project");
    init_db_with_org(&db_path);

    let out = temp_out("report_unknown_project", "csv");

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "report", "--format", "csv", "--file", &out,
            "--month", "2024-03", "--project", "P999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown project"));
}
