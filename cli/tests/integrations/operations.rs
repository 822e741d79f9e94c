use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_operations_lists_selectors() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("operations");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("subtract"))
        .stdout(predicate::str::contains("multiply"))
        .stdout(predicate::str::contains("divide"));
}

#[test]
fn test_help_mentions_commands() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("operations"));
}
