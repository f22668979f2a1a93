// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GNU screen adapters

mod cli;
mod registry;

pub use cli::ScreenCli;
pub use registry::list_sessions;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeScreenAdapter, ScreenCall};

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from screen operations
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("{} is missing", .0.display())]
    BinaryMissing(PathBuf),
    #[error("command failed: {0}")]
    CommandFailed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Adapter for querying the screen multiplexer
#[async_trait]
pub trait ScreenAdapter: Clone + Send + Sync + 'static {
    /// Check that the screen binary exists.
    fn check_binary(&self) -> Result<(), ScreenError>;

    /// Raw stdout of `screen -ls`.
    async fn list_output(&self) -> Result<String, ScreenError>;
}
