// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of running worker sessions.

use std::collections::BTreeMap;

use ns_core::parse_session_list;

use super::{ScreenAdapter, ScreenError};

/// List running screen sessions as `"<pid>.<fragment>" -> decoded name`.
///
/// An empty `filter` returns every session. Otherwise only sessions of the
/// worker named `filter` are returned. Issues exactly one `screen -ls`.
pub async fn list_sessions<S: ScreenAdapter>(
    adapter: &S,
    filter: &str,
) -> Result<BTreeMap<String, String>, ScreenError> {
    let output = adapter.list_output().await?;
    let sessions = parse_session_list(&output, filter);
    tracing::debug!(filter, count = sessions.len(), "listed screen sessions");
    Ok(sessions)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
