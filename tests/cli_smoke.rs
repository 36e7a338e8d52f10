use assert_cmd::prelude::*;
use std::process::Command;

// Offline checks only; nothing here touches the GitHub API.

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("ghviz").unwrap();
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("heat"));
    assert!(text.contains("stats"));
    assert!(text.contains("export"));
}

#[test]
fn version_flag_works() {
    let mut cmd = Command::cargo_bin("ghviz").unwrap();
    cmd.arg("--version").assert().success();
}

#[test]
fn missing_user_is_an_error() {
    let mut cmd = Command::cargo_bin("ghviz").unwrap();
    cmd.arg("stats").assert().failure();
}

#[test]
fn zero_day_window_is_rejected() {
    let mut cmd = Command::cargo_bin("ghviz").unwrap();
    cmd.args(["--user", "octocat", "--days", "0", "stats"])
        .assert()
        .failure();
}

#[test]
fn heat_help_documents_the_filter_asymmetry() {
    let mut cmd = Command::cargo_bin("ghviz").unwrap();
    let out = cmd
        .args(["--user", "octocat", "heat", "--help"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("--filter"));
    assert!(text.contains("--interactive"));
}
