//! `nsc logs du` / `nsc logs purge`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn du_sums_nested_files() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();
    root.file("_cam.log", &"x".repeat(1024));
    root.file("latest/rosout.log", &"y".repeat(512));

    root.nsc()
        .args(&["logs", "du"])
        .passes()
        .stdout_eq(&format!("1.5 KiB\t{dir}\n"));
}

#[test]
#[serial(screen)]
fn du_json_reports_bytes() {
    let root = LogRoot::empty();
    root.file("_cam.log", "12345");

    let run = root.nsc().args(&["logs", "du", "-o", "json"]).passes();
    assert_eq!(run.json()["bytes"], 5);
}

#[test]
#[serial(screen)]
fn purge_empties_but_keeps_root() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();
    root.file("_cam.log", "log");
    root.file(".hidden", "dot");
    root.file("latest/rosout.log", "nested");

    root.nsc()
        .args(&["logs", "purge"])
        .passes()
        .stdout_eq(&format!("Purged 3 entries from {dir}\n"));

    assert!(root.path().is_dir());
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
#[serial(screen)]
fn purge_of_missing_root_is_noop() {
    let root = LogRoot::empty();
    let missing = root.path().join("absent");

    root.nsc()
        .env("ROS_LOG_DIR", &missing)
        .args(&["logs", "purge"])
        .passes()
        .stdout_eq(&format!("Purged 0 entries from {}\n", missing.display()));
    assert!(!missing.exists());
}
