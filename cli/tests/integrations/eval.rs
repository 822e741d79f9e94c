use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    Command::cargo_bin("calc").unwrap()
}

#[test]
fn test_eval_add_table() {
    calc()
        .args(["eval", "4", "2", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 + 2"))
        .stdout(predicate::str::contains("6"));
}

#[test]
fn test_eval_raw_output() {
    calc()
        .args(["eval", "4", "2", "add", "--raw"])
        .assert()
        .success()
        .stdout("6\n");

    calc()
        .args(["eval", "4", "2", "subtract", "-r"])
        .assert()
        .success()
        .stdout("2\n");

    calc()
        .args(["eval", "4", "2", "multiply", "--raw"])
        .assert()
        .success()
        .stdout("8\n");

    calc()
        .args(["eval", "1", "4", "divide", "--raw"])
        .assert()
        .success()
        .stdout("0.25\n");
}

#[test]
fn test_eval_negative_operands() {
    calc()
        .args(["eval", "-7.5", "2.5", "add", "--raw"])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn test_eval_divide_by_zero() {
    calc()
        .args(["eval", "5", "0", "divide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_eval_invalid_operation() {
    calc()
        .args(["eval", "1", "1", "power"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operation"));
}

#[test]
fn test_eval_operation_is_case_sensitive() {
    calc()
        .args(["eval", "1", "1", "Add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operation"));
}

#[test]
fn test_eval_json_output() {
    calc()
        .args(["eval", "4", "2", "divide", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": 2.0"))
        .stdout(predicate::str::contains("\"error\": null"));
}

#[test]
fn test_eval_json_output_on_error() {
    calc()
        .args(["eval", "5", "0", "divide", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "\"error\": \"Cannot divide by zero\"",
        ));
}

#[test]
fn test_eval_missing_operands() {
    calc()
        .args(["eval", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing operands"));
}

#[test]
fn test_eval_non_numeric_operand() {
    calc().args(["eval", "four", "2", "add"]).assert().failure();
}

#[test]
fn test_eval_raw_conflicts_with_json() {
    calc()
        .args(["eval", "4", "2", "add", "--raw", "--json"])
        .assert()
        .failure();
}
