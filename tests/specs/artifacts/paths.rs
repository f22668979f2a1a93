//! `nsc paths`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn prints_all_artifact_paths() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();

    root.nsc().args(&["paths", "/arm/driver"]).passes().stdout_eq(&format!(
        "log      {dir}/_arm_driver.log\n\
         config   {dir}/_arm_driver.conf\n\
         pid      {dir}/_arm_driver.pid\n\
         raw_log  {dir}/arm_driver.log\n"
    ));
}

#[test]
#[serial(screen)]
fn paths_json() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();

    let run = root.nsc().args(&["paths", "/cam", "-o", "json"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "log": format!("{dir}/_cam.log"),
            "config": format!("{dir}/_cam.conf"),
            "pid": format!("{dir}/_cam.pid"),
            "raw_log": format!("{dir}/cam.log"),
        })
    );
}

#[test]
#[serial(screen)]
fn paths_touch_nothing() {
    let root = LogRoot::empty();
    root.nsc().args(&["paths", "/cam"]).passes();
    assert!(!root.has("_cam.log"));
    assert!(!root.has("_cam.conf"));
}
