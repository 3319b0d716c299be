//! CLI surface tests.
//!
//! Usage errors must fail fast and offline: no config, no connection, no
//! filesystem writes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn modelgen() -> Command {
    let mut cmd = Command::cargo_bin("modelgen").unwrap();
    cmd.env_remove("DATABASE_URL");
    cmd
}

fn dir_entries(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[test]
fn test_generate_requires_a_table_selection() {
    let workdir = TempDir::new().unwrap();
    modelgen()
        .current_dir(workdir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no --table specified or --all"));

    // misuse must not create anything
    assert_eq!(dir_entries(&workdir), 0);
}

#[test]
fn test_generate_rejects_table_and_all_together() {
    let workdir = TempDir::new().unwrap();
    modelgen()
        .current_dir(workdir.path())
        .args(["generate", "--table", "users", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert_eq!(dir_entries(&workdir), 0);
}

#[test]
fn test_generate_without_any_connection_configured() {
    let workdir = TempDir::new().unwrap();
    modelgen()
        .current_dir(workdir.path())
        .args(["generate", "--table", "users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database connection"));
}

#[test]
fn test_generate_with_unknown_named_connection() {
    let workdir = TempDir::new().unwrap();
    modelgen()
        .current_dir(workdir.path())
        .args(["generate", "--table", "users", "--connection", "legacy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown connection 'legacy'"));
}

#[test]
fn test_generate_rejects_unsupported_database_urls() {
    let workdir = TempDir::new().unwrap();
    modelgen()
        .current_dir(workdir.path())
        .env("DATABASE_URL", "sqlite://app.db")
        .args(["generate", "--table", "users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported database URL"));
}

#[test]
fn test_named_connection_comes_from_config_file() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(
        workdir.path().join("modelgen.toml"),
        "[connections.files]\nurl = \"file://not-a-database\"\n",
    )
    .unwrap();

    // resolution succeeds, driver detection then rejects the URL
    modelgen()
        .current_dir(workdir.path())
        .args(["generate", "--table", "users", "--connection", "files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported database URL"));
}

#[test]
fn test_help_lists_subcommands() {
    modelgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("tables"))
        .stdout(predicate::str::contains("columns"));
}

#[test]
fn test_columns_requires_table_argument() {
    modelgen()
        .arg("columns")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--table"));
}
