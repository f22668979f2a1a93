//! `nsc start-cmd`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn prints_start_command_and_writes_config() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();
    let bin = root.screen_bin().display().to_string();

    root.nsc()
        .args(&["start-cmd", "/arm/driver"])
        .passes()
        .stdout_eq(&format!(
            "{bin} -c {dir}/_arm_driver.conf -L -dmS _arm_driver\n"
        ));

    similar_asserts::assert_eq!(
        root.read("_arm_driver.conf"),
        format!("logfile {dir}/_arm_driver.log\nlogfile flush 0\ndefscrollback 10000\n")
    );
}

#[test]
#[serial(screen)]
fn caller_values_beat_host_values() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();

    root.nsc()
        .env("ROS_MASTER_URI", "http://host:11311")
        .env("ROS_HOSTNAME", "robot")
        .env("GSCAM_CONFIG", "v4l2src")
        .args(&[
            "start-cmd",
            "/cam",
            "-e",
            "ROS_MASTER_URI=http://caller:11311",
            "-e",
            "RESPAWN_MAX=",
            "-k",
            "GSCAM_CONFIG",
        ])
        .passes();

    similar_asserts::assert_eq!(
        root.read("_cam.conf"),
        format!(
            "logfile {dir}/_cam.log\n\
             logfile flush 0\n\
             defscrollback 10000\n\
             setenv GSCAM_CONFIG v4l2src\n\
             setenv ROS_MASTER_URI http://caller:11311\n\
             setenv ROS_HOSTNAME robot\n"
        )
    );
}

#[test]
#[serial(screen)]
fn creates_missing_log_root() {
    let root = LogRoot::empty();
    let nested = root.path().join("latest/run-1");

    root.nsc()
        .env("ROS_LOG_DIR", &nested)
        .args(&["start-cmd", "/cam"])
        .passes();

    assert!(nested.join("_cam.conf").is_file());
}

#[test]
#[serial(screen)]
fn start_cmd_json() {
    let root = LogRoot::empty();
    let dir = root.path().display().to_string();

    let run = root
        .nsc()
        .args(&["-o", "json", "start-cmd", "/cam"])
        .passes();
    let json = run.json();
    assert_eq!(json["session_name"], "_cam");
    assert_eq!(json["config_file"], format!("{dir}/_cam.conf"));
    assert_eq!(
        json["args"],
        serde_json::json!(["-c", format!("{dir}/_cam.conf"), "-L", "-dmS", "_cam"])
    );
}

#[test]
#[serial(screen)]
fn quotes_log_root_with_spaces() {
    let root = LogRoot::empty();
    let spaced = root.path().join("robot logs");
    let bin = root.screen_bin().display().to_string();

    root.nsc()
        .env("ROS_LOG_DIR", &spaced)
        .args(&["start-cmd", "/cam"])
        .passes()
        .stdout_eq(&format!(
            "{bin} -c '{}/_cam.conf' -L -dmS _cam\n",
            spaced.display()
        ));
}

#[test]
#[serial(screen)]
fn rejects_line_break_in_env_value() {
    let root = LogRoot::empty();
    root.nsc()
        .args(&["start-cmd", "/cam", "-e", "ROS_NAMESPACE=/ns\nlogfile /tmp/x"])
        .fails()
        .stderr_has("line break");
    assert!(!root.has("_cam.conf"));
}
