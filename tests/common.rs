#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lvl() -> Command {
    cargo_bin_cmd!("leavelogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leavelogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize schema on a fresh test DB
pub fn init_db(db_path: &str) {
    lvl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small org useful for many tests:
/// one manager (E0001), one employee (E0002) on project P001.
pub fn init_db_with_org(db_path: &str) {
    init_db(db_path);

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "project", "--add", "--id", "P001", "--name",
            "Apollo",
        ])
        .assert()
        .success();

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "user", "--add", "--id", "E0001", "--first",
            "Alice", "--last", "Rossi", "--role", "MANAGER", "--project", "P001",
        ])
        .assert()
        .success();

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "user", "--add", "--id", "E0002", "--first",
            "Bruno", "--last", "Bianchi", "--role", "EMPLOYEE", "--project", "P001",
            "--manager", "E0001",
        ])
        .assert()
        .success();
}

/// Seed a couple of leave records in March 2024 for E0002 (admin override,
/// since 2024-03 is a closed month for everyone else).
pub fn seed_march_2024_leaves(db_path: &str) {
    lvl()
        .args([
            "--db", db_path, "--as", "admin", "apply", "2024-03-05", "--status", "leave",
            "--reason", "Trip", "--employee", "E0002",
        ])
        .assert()
        .success();

    lvl()
        .args([
            "--db", db_path, "--as", "admin", "apply", "2024-03-12", "--status", "half-day",
            "--employee", "E0002",
        ])
        .assert()
        .success();
}
