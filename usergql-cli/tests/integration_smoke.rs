//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("usergql").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("print-schema"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("usergql").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_print_schema() {
    let mut cmd = Command::cargo_bin("usergql").unwrap();
    cmd.arg("print-schema");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("type UserType"))
        .stdout(predicate::str::contains("create_user("))
        .stdout(predicate::str::contains("get_users: [UserType!]!"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let mut cmd = Command::cargo_bin("usergql").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_logging_flags_keep_stdout_clean() {
    let mut cmd = Command::cargo_bin("usergql").unwrap();
    cmd.env("RUST_LOG", "debug")
        .args(["--debug", "--otel", "print-schema"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("type UserType"))
        .stdout(predicate::str::contains("otel").not())
        .stdout(predicate::str::contains("DEBUG").not());
}
