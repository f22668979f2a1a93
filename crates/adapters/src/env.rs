// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::path::PathBuf;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

/// Log root override (`ROS_LOG_DIR`).
pub fn ros_log_dir() -> Option<PathBuf> {
    non_empty("ROS_LOG_DIR").map(PathBuf::from)
}

/// Screen binary override (`NS_SCREEN_BIN`).
pub fn screen_bin() -> Option<PathBuf> {
    non_empty("NS_SCREEN_BIN").map(PathBuf::from)
}

/// Timeout for `screen -ls` (`NS_LIST_TIMEOUT_MS`, default: none).
pub fn list_timeout_ms() -> Option<Duration> {
    parse_duration_ms("NS_LIST_TIMEOUT_MS")
}

/// Host environment value used when the caller did not supply one.
pub fn host_var(key: &str) -> Option<String> {
    non_empty(key)
}
