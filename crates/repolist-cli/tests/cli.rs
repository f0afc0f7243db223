use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repolist"));
}

#[test]
fn test_help_lists_all_options() {
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("--org-id"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--groups"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--filter"));
}

#[test]
fn test_missing_token_aborts_before_any_network_call() {
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.env_remove("CODEUP_TOKEN")
        .arg("--dry-run")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("No access token"))
        .stderr(predicate::str::contains("CODEUP_TOKEN"));
}

#[test]
fn test_empty_token_flag_is_treated_as_missing() {
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.env_remove("CODEUP_TOKEN")
        .arg("--token")
        .arg("")
        .arg("--dry-run")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("No access token"));
}

#[test]
fn test_missing_token_does_not_create_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.env_remove("CODEUP_TOKEN")
        .current_dir(dir.path())
        .assert()
        .failure();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("repolist");
    cmd.arg("--nonsense")
        .assert()
        .failure()
        .code(predicate::eq(2));
}
