//! `nsc check`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn check_reports_present_binary() {
    let root = LogRoot::empty();
    root.nsc()
        .args(&["check"])
        .passes()
        .stdout_eq(&format!("{} is present\n", root.screen_bin().display()));
}

#[test]
#[serial(screen)]
fn check_json() {
    let root = LogRoot::empty();
    let run = root.nsc().args(&["check", "-o", "json"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "screen_bin": root.screen_bin().display().to_string(),
            "present": true,
        })
    );
}

#[test]
#[serial(screen)]
fn check_fails_for_directory() {
    let root = LogRoot::empty();
    root.nsc()
        .env("NS_SCREEN_BIN", root.path())
        .args(&["check"])
        .fails()
        .stderr_has("is missing");
}
