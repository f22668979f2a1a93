// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen adapter configuration.
//!
//! Resolved once at process start and passed to every component.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::env;

/// Default location of the screen binary.
pub const DEFAULT_SCREEN_BIN: &str = "/usr/bin/screen";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve log directory: ROS_LOG_DIR is unset and no home directory found")]
    NoLogRoot,
}

/// Screen adapter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Directory holding screen logs, configs and pid files (e.g. ~/.ros/log)
    pub log_root: PathBuf,
    /// Path to the screen binary
    pub screen_bin: PathBuf,
    /// Optional timeout for `screen -ls`
    pub list_timeout: Option<Duration>,
}

impl ScreenConfig {
    /// Configuration rooted at `log_root` with default binary and no timeout.
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self {
            log_root: log_root.into(),
            screen_bin: PathBuf::from(DEFAULT_SCREEN_BIN),
            list_timeout: None,
        }
    }

    /// Load configuration from the environment.
    ///
    /// Log root: `ROS_LOG_DIR` > `~/.ros/log`.
    pub fn load() -> Result<Self, ConfigError> {
        let log_root = match env::ros_log_dir() {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(ConfigError::NoLogRoot)?
                .join(".ros")
                .join("log"),
        };
        let mut config = Self::new(log_root);
        if let Some(bin) = env::screen_bin() {
            config.screen_bin = bin;
        }
        config.list_timeout = env::list_timeout_ms();
        Ok(config)
    }

    pub fn with_screen_bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.screen_bin = bin.into();
        self
    }

    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    pub fn log_root(&self) -> &Path {
        &self.log_root
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
