// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake screen adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ScreenAdapter, ScreenError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

/// Recorded screen call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCall {
    CheckBinary,
    ListOutput,
}

struct FakeScreenState {
    output: String,
    binary_present: bool,
    list_error: Option<String>,
    calls: Vec<ScreenCall>,
}

/// Fake screen adapter for testing
#[derive(Clone)]
pub struct FakeScreenAdapter {
    inner: Arc<Mutex<FakeScreenState>>,
}

impl Default for FakeScreenAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeScreenState {
                output: String::new(),
                binary_present: true,
                list_error: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeScreenAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter whose `screen -ls` prints `output`
    pub fn with_output(output: &str) -> Self {
        let adapter = Self::default();
        adapter.set_output(output);
        adapter
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ScreenCall> {
        self.inner.lock().calls.clone()
    }

    /// Set the `screen -ls` output
    pub fn set_output(&self, output: &str) {
        self.inner.lock().output = output.to_string();
    }

    /// Simulate a missing screen binary
    pub fn set_binary_present(&self, present: bool) {
        self.inner.lock().binary_present = present;
    }

    /// Make `list_output` fail with `CommandFailed`
    pub fn set_list_error(&self, message: &str) {
        self.inner.lock().list_error = Some(message.to_string());
    }
}

#[async_trait]
impl ScreenAdapter for FakeScreenAdapter {
    fn check_binary(&self) -> Result<(), ScreenError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ScreenCall::CheckBinary);
        if inner.binary_present {
            Ok(())
        } else {
            Err(ScreenError::BinaryMissing(PathBuf::from("/fake/screen")))
        }
    }

    async fn list_output(&self) -> Result<String, ScreenError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ScreenCall::ListOutput);
        if let Some(ref message) = inner.list_error {
            return Err(ScreenError::CommandFailed(message.clone()));
        }
        Ok(inner.output.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
