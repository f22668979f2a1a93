// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::screen::{ScreenAdapter, ScreenError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any ScreenAdapter
#[derive(Clone)]
pub struct TracedScreen<S> {
    inner: S,
}

impl<S> TracedScreen<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ScreenAdapter> ScreenAdapter for TracedScreen<S> {
    fn check_binary(&self) -> Result<(), ScreenError> {
        let result = self.inner.check_binary();
        if let Err(ref e) = result {
            tracing::error!(error = %e, "screen binary check failed");
        }
        result
    }

    async fn list_output(&self) -> Result<String, ScreenError> {
        async {
            tracing::debug!("listing");
            let start = std::time::Instant::now();
            let result = self.inner.list_output().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(output) => {
                    tracing::info!(lines = output.lines().count(), elapsed_ms, "listed")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "list failed"),
            }
            result
        }
        .instrument(tracing::info_span!("screen.list"))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
