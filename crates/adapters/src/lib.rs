// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the screen binary and the log root

pub mod cleanup;
pub mod config;
mod env;
pub mod screen;
pub mod screen_config;
pub mod subprocess;
pub mod traced;

pub use cleanup::{delete_artifacts, log_dir_size, purge_log_dir};
pub use config::{ConfigError, ScreenConfig, DEFAULT_SCREEN_BIN};
pub use screen::{list_sessions, ScreenAdapter, ScreenCli, ScreenError};
pub use screen_config::{build_start_command, StartCommand, FORWARDED_ENV};
pub use traced::TracedScreen;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use screen::{FakeScreenAdapter, ScreenCall};
