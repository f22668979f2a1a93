//! `nsc clean`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn removes_worker_artifacts_only() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();
    root.file("_arm_driver.log", "log");
    root.file("_arm_driver.conf", "conf");
    root.file("_arm_driver.pid", "4242");
    root.file("arm_driver.log", "raw");
    root.file("_camera.log", "other");

    root.nsc()
        .args(&["clean", "/arm/driver"])
        .passes()
        .stdout_eq(&format!(
            "Removed {dir}/_arm_driver.log\n\
             Removed {dir}/_arm_driver.conf\n\
             Removed {dir}/_arm_driver.pid\n\
             Removed {dir}/arm_driver.log\n"
        ));

    assert!(!root.has("_arm_driver.log"));
    assert!(!root.has("arm_driver.log"));
    assert!(root.has("_camera.log"));
}

#[test]
#[serial(screen)]
fn clean_is_idempotent() {
    let root = LogRoot::empty();
    root.file("_cam.pid", "1");

    root.nsc().args(&["clean", "/cam"]).passes();
    root.nsc()
        .args(&["clean", "/cam"])
        .passes()
        .stdout_eq("Nothing to clean for /cam\n");
}

#[test]
#[serial(screen)]
fn clean_skips_directories() {
    let root = LogRoot::empty();
    root.file("_cam.log/keep", "nested");

    root.nsc().args(&["clean", "/cam"]).passes();
    assert!(root.has("_cam.log/keep"));
}
