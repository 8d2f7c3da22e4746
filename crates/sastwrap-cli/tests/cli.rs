use assert_cmd::Command;
use predicates::prelude::*;

fn sastwrap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sastwrap").expect("binary should be built");
    cmd.env_remove("SOOS_API_KEY").env_remove("SOOS_API_CLIENT");
    cmd
}

fn required_args(cmd: &mut Command) -> &mut Command {
    cmd.arg("--apiKey")
        .arg("key")
        .arg("--clientId")
        .arg("client")
        .arg("--projectName")
        .arg("demo")
}

#[test]
fn help_flag_prints_usage() {
    sastwrap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sarifGenerator"))
        .stdout(predicate::str::contains("--apiKey"))
        .stdout(predicate::str::contains("--otherOptions"));
}

#[test]
fn version_flag_prints_version() {
    sastwrap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sastwrap"));
}

#[test]
fn missing_required_arguments_fail_with_usage() {
    sastwrap_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_generator_value_fails() {
    let mut cmd = sastwrap_cmd();
    required_args(&mut cmd)
        .arg("--sarifGenerator")
        .arg("CodeQL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn invalid_log_level_fails() {
    let mut cmd = sastwrap_cmd();
    required_args(&mut cmd)
        .arg("--logLevel")
        .arg("verbose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// The reporting CLI is not present outside the container image, so a File run
// must end with exit code 1 and an error naming the failed command.
#[test]
fn file_generator_without_report_cli_exits_one() {
    let mut cmd = sastwrap_cmd();
    required_args(&mut cmd)
        .arg("--sarifGenerator")
        .arg("File")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("node"));
}

#[test]
fn unknown_generator_is_rejected_at_dispatch() {
    let mut cmd = sastwrap_cmd();
    required_args(&mut cmd)
        .arg("--sarifGenerator")
        .arg("Unknown")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "sarif generator not implemented: Unknown",
        ));
}
