//! Error reporting and exit codes.

use crate::prelude::*;
use serial_test::serial;

#[test]
fn unknown_command_fails() {
    cli()
        .args(&["frobnicate"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn malformed_env_pair_is_rejected() {
    cli()
        .args(&["start-cmd", "/cam", "-e", "NOVALUE"])
        .fails()
        .stderr_has("expected KEY=VALUE");
}

#[test]
#[serial(screen)]
fn missing_screen_binary_exits_one() {
    let root = LogRoot::empty();
    let missing = root.path().join("no-such-screen");
    let run = root
        .nsc()
        .env("NS_SCREEN_BIN", &missing)
        .args(&["list"])
        .fails()
        .stderr_has(&format!("Error: {} is missing", missing.display()));
    assert_eq!(run.code(), Some(1));
}

#[test]
#[serial(screen)]
fn silent_list_failure_lists_nothing() {
    let root = LogRoot::empty();
    root.screen_fails("Cannot make directory /run/screen");

    root.nsc()
        .args(&["list"])
        .passes()
        .stdout_eq("No sessions\n")
        .stderr_has("screen -ls failed without output");
}

#[test]
#[serial(screen)]
fn list_timeout_is_an_error() {
    let root = LogRoot::empty();
    root.screen_script("exec sleep 5");

    root.nsc()
        .env("NS_LIST_TIMEOUT_MS", "100")
        .args(&["list"])
        .fails()
        .stderr_has("Error: command failed: screen -ls timed out after 100ms");
}
