// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen adapter backed by the screen binary

use super::{ScreenAdapter, ScreenError};
use crate::config::ScreenConfig;
use crate::subprocess::run_with_timeout;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

/// Screen adapter that runs the screen binary
#[derive(Clone, Debug)]
pub struct ScreenCli {
    bin: PathBuf,
    list_timeout: Option<Duration>,
}

impl ScreenCli {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            list_timeout: None,
        }
    }

    pub fn from_config(config: &ScreenConfig) -> Self {
        Self {
            bin: config.screen_bin.clone(),
            list_timeout: config.list_timeout,
        }
    }

    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }
}

#[async_trait]
impl ScreenAdapter for ScreenCli {
    fn check_binary(&self) -> Result<(), ScreenError> {
        if self.bin.is_file() {
            Ok(())
        } else {
            Err(ScreenError::BinaryMissing(self.bin.clone()))
        }
    }

    async fn list_output(&self) -> Result<String, ScreenError> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("-ls");
        let output = run_with_timeout(cmd, self.list_timeout, "screen -ls")
            .await
            .map_err(ScreenError::CommandFailed)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        // screen -ls exits non-zero even when it prints sessions, and a
        // failure that prints nothing just means nothing is listed.
        if !output.status.success() {
            if stdout.trim().is_empty() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::warn!(
                    bin = %self.bin.display(),
                    status = %output.status,
                    stderr = %stderr.trim(),
                    "screen -ls failed without output"
                );
                return Ok(String::new());
            }
            tracing::debug!(status = %output.status, "screen -ls exited non-zero with output");
        }

        Ok(stdout)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
