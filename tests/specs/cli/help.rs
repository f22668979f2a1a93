//! Help and version output.

use crate::prelude::*;

#[test]
fn no_args_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: nsc [OPTIONS] [COMMAND]")
        .stdout_has("list")
        .stdout_has("start-cmd");
}

#[test]
fn help_lists_every_command() {
    let run = cli().args(&["--help"]).passes();
    for command in [
        "list", "encode", "decode", "paths", "start-cmd", "clean", "logs", "check",
    ] {
        assert!(
            run.stdout().contains(command),
            "help should mention '{}'",
            command
        );
    }
}

#[test]
fn logs_help_lists_subcommands() {
    cli()
        .args(&["logs", "--help"])
        .passes()
        .stdout_has("du")
        .stdout_has("purge");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("nsc {}\n", env!("CARGO_PKG_VERSION")));
}
