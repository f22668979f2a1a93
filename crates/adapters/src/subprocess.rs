// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Run a subprocess command, optionally bounded by a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout` when `timeout` is
/// set, converting expiration into a descriptive error message. The child
/// is killed when the timeout elapses. A non-zero exit status is not an
/// error here; callers inspect `Output::status`.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Option<Duration>,
    description: &str,
) -> Result<Output, String> {
    cmd.kill_on_drop(true);
    let Some(timeout) = timeout else {
        return cmd
            .output()
            .await
            .map_err(|io_err| format!("{} failed: {}", description, io_err));
    };
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(format!("{} failed: {}", description, io_err)),
        Err(_elapsed) => Err(format!(
            "{} timed out after {}ms",
            description,
            timeout.as_millis()
        )),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
