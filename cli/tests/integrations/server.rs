use assert_cmd::Command;

#[test]
fn test_server_command_available() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_server_rejects_invalid_port() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["server", "--port", "not-a-port"]);

    cmd.assert().failure();
}

#[test]
fn test_server_help_shows_env_overrides() {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.args(["server", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("CALC_PORT"))
        .stdout(predicates::str::contains("CALC_HOST"));
}
