//! `nsc list`.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(screen)]
fn lists_every_session() {
    let root = LogRoot::empty();
    root.screen_ls(LISTING, 1);

    root.nsc().args(&["list"]).passes().stdout_eq(
        "\
SESSION            PID  NAME
4242._arm_driver  4242  /arm/driver
5151._camera      5151  /camera
777.pts-3.robot    777  pts-3.robot
",
    );
}

#[test]
#[serial(screen)]
fn filters_by_worker_name() {
    let root = LogRoot::empty();
    root.screen_ls(LISTING, 1);

    root.nsc().args(&["list", "/camera"]).passes().stdout_eq(
        "\
SESSION        PID  NAME
5151._camera  5151  /camera
",
    );
}

#[test]
#[serial(screen)]
fn filter_name_is_made_absolute() {
    let root = LogRoot::empty();
    root.screen_ls(LISTING, 0);

    root.nsc()
        .args(&["list", "arm/driver"])
        .passes()
        .stdout_has("4242._arm_driver");
}

#[test]
#[serial(screen)]
fn filter_skips_foreign_sessions() {
    let root = LogRoot::empty();
    root.screen_ls(LISTING, 1);

    root.nsc()
        .args(&["list", "pts-3.robot"])
        .passes()
        .stdout_eq("No sessions\n");
}

#[test]
#[serial(screen)]
fn no_sockets_means_no_sessions() {
    let root = LogRoot::empty();
    root.nsc().args(&["list"]).passes().stdout_eq("No sessions\n");
}

#[test]
#[serial(screen)]
fn json_maps_session_to_name() {
    let root = LogRoot::empty();
    root.screen_ls(LISTING, 1);

    let run = root.nsc().args(&["-o", "json", "list"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "4242._arm_driver": "/arm/driver",
            "5151._camera": "/camera",
            "777.pts-3.robot": "pts-3.robot",
        })
    );
}
