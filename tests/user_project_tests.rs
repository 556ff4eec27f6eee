mod common;
use common::{init_db, init_db_with_org, lvl, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_user_add_and_list() {
    let db_path = setup_test_db("user_add_list");
    init_db_with_org(&db_path);

    lvl()
        .args(["--db", &db_path, "--as", "manager", "user", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E0001"))
        .stdout(predicate::str::contains("Alice Rossi"))
        .stdout(predicate::str::contains("Bruno Bianchi"));
}

#[test]
fn test_user_add_requires_admin() {
    let db_path = setup_test_db("user_add_admin_only");
    init_db(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "manager", "user", "--add", "--id", "E0099", "--first",
            "Carla", "--last", "Verdi",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin role required"));
}

#[test]
fn test_user_duplicate_id_rejected() {
    let db_path = setup_test_db("user_duplicate");
    init_db_with_org(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "user", "--add", "--id", "E0002", "--first",
            "Copy", "--last", "Cat",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_user_search_matches_name_and_id() {
    let db_path = setup_test_db("user_search");
    init_db_with_org(&db_path);

    lvl()
        .args(["--db", &db_path, "--as", "admin", "user", "--search", "bianchi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E0002"))
        .stdout(predicate::str::contains("Alice Rossi").not());

    lvl()
        .args(["--db", &db_path, "--as", "admin", "user", "--search", "e0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Rossi"));
}

#[test]
fn test_user_update_and_delete() {
    let db_path = setup_test_db("user_update_delete");
    init_db_with_org(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "user", "--update", "--id", "E0002", "--role",
            "MANAGER",
        ])
        .assert()
        .success();

    lvl()
        .args(["--db", &db_path, "--as", "admin", "user", "--search", "E0002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MANAGER"));

    lvl()
        .args(["--db", &db_path, "--as", "admin", "user", "--del", "E0002"])
        .assert()
        .success();

    lvl()
        .args(["--db", &db_path, "--as", "admin", "user", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E0002").not());
}

#[test]
fn test_employee_cannot_list_users() {
    let db_path = setup_test_db("user_list_forbidden");
    init_db_with_org(&db_path);

    lvl()
        .args(["--db", &db_path, "user", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not permitted"));
}

#[test]
fn test_project_add_and_list() {
    let db_path = setup_test_db("project_add_list");
    init_db(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "project", "--add", "--id", "P007", "--name",
            "Borealis",
        ])
        .assert()
        .success();

    lvl()
        .args(["--db", &db_path, "project", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P007"))
        .stdout(predicate::str::contains("Borealis"));
}

#[test]
fn test_override_on_unknown_employee_fails() {
    let db_path = setup_test_db("unknown_employee");
    init_db(&db_path);

    lvl()
        .args([
            "--db", &db_path, "--as", "admin", "apply", "2020-01-15", "--status", "leave",
            "--employee", "E9999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown employee"));
}
