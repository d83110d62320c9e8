use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command isolated from the user's settings
fn coach_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coach").expect("Failed to find coach binary");
    cmd.arg("--no-color")
        .arg("--settings-file")
        .arg(temp_dir.path().join("settings.json"))
        .arg("--credentials-file")
        .arg(temp_dir.path().join("credentials.json"));
    cmd
}

/// Address nothing is listening on.
fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has an address");
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn test_cli_plan_stub_mode() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week of "))
        .stdout(predicate::str::contains(
            "1. 10-min starter: open your notes and write 3 topics to review",
        ))
        .stdout(predicate::str::contains("## Best next action"));
}

#[test]
fn test_cli_default_command_shows_plan() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 0/2 done"));
}

#[test]
fn test_cli_chat_stub_mode() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "chat", "review chapter 4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**You**"))
        .stdout(predicate::str::contains("review chapter 4"))
        .stdout(predicate::str::contains("You said: review chapter 4"))
        .stdout(predicate::str::contains("Thinking…").not());
}

#[test]
fn test_cli_chat_blank_message_is_ignored() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "chat", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages yet."));
}

#[test]
fn test_cli_live_mode_falls_back_when_backend_is_down() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--live", "--base-url", &closed_base_url(), "chat", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10-min starter"))
        .stdout(predicate::str::contains("You said: hello"));
}

#[test]
fn test_cli_health_reports_stub_mode() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stub mode is on"));
}

#[test]
fn test_cli_health_unreachable_backend() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--live", "--base-url", &closed_base_url(), "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is unavailable"));
}

#[test]
fn test_cli_assignments_unknown_in_stub_mode() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "assignments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported assignments: unknown"));
}

#[test]
fn test_cli_auth_token_is_persisted() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "auth", "token", "session-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session token saved"));

    let stored = std::fs::read_to_string(temp_dir.path().join("credentials.json"))
        .expect("Credentials file should exist");
    assert!(stored.contains("session-123"));
}

#[test]
fn test_cli_auth_start_unavailable_in_stub_mode() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--stub", "auth", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("External auth is unavailable"));
}

#[test]
fn test_cli_config_set_and_show() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args([
            "config",
            "set",
            "--use-stub-data",
            "false",
            "--url",
            "http://10.1.2.3:8000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    coach_cmd(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Mode: live"))
        .stdout(predicate::str::contains("- Base URL: http://10.1.2.3:8000"));
}

#[test]
fn test_cli_config_show_honors_overrides() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--live", "--base-url", "http://example.test", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Mode: live"))
        .stdout(predicate::str::contains("- Base URL: http://example.test"));
}

#[test]
fn test_cli_live_and_stub_conflict() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir)
        .args(["--live", "--stub", "plan"])
        .assert()
        .failure();
}

#[test]
fn test_cli_chat_requires_message() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir).args(["chat"]).assert().failure();
}
