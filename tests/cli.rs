use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "adwatch";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Help command should list both subcommands.
fn cli_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("check"));
}

#[test]
/// Check against an unreachable backend should fail with the fixed error message.
fn check_unreachable_backend_reports_fetch_failure() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check")
        .arg("--api-url")
        .arg("http://127.0.0.1:9/")
        .assert()
        .failure()
        .stdout(contains("Failed to fetch data"));
}

#[test]
/// The API base URL can come from the environment when the flag is omitted.
fn check_reads_api_url_from_environment() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check")
        .env("ADWATCH_API_URL", "http://127.0.0.1:9/")
        .assert()
        .failure()
        .stdout(contains("http://127.0.0.1:9"));
}

#[test]
/// The --api-url flag takes precedence over the environment variable.
fn check_flag_overrides_environment_variable() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("check")
        .arg("--api-url")
        .arg("http://127.0.0.1:9/")
        .env("ADWATCH_API_URL", "http://unreachable.invalid")
        .assert()
        .failure()
        .stdout(contains("http://127.0.0.1:9"));
}
