// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nsc list` and `nsc check` - Screen session queries

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use ns_adapters::{list_sessions, ScreenAdapter};
use ns_core::WorkerName;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

/// List running sessions, optionally only those of worker `name`.
///
/// `name` is matched in its absolute form, so `camera` finds `/camera`.
pub async fn list<S: ScreenAdapter>(
    adapter: &S,
    name: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    adapter.check_binary()?;
    let filter = name.map(WorkerName::new).unwrap_or_default();
    let sessions = list_sessions(adapter, filter.as_str()).await?;

    match format {
        OutputFormat::Text => {
            if sessions.is_empty() {
                println!("No sessions");
            } else {
                format_session_list(&mut std::io::stdout(), &sessions);
            }
        }
        OutputFormat::Json => print_json(&sessions)?,
    }
    Ok(())
}

/// Verify the screen binary is present.
pub fn check<S: ScreenAdapter>(adapter: &S, bin: &str, format: OutputFormat) -> Result<()> {
    adapter.check_binary()?;
    match format {
        OutputFormat::Text => println!("{} is present", bin),
        OutputFormat::Json => print_json(&serde_json::json!({
            "screen_bin": bin,
            "present": true,
        }))?,
    }
    Ok(())
}

fn format_session_list(w: &mut impl Write, sessions: &BTreeMap<String, String>) {
    let mut table = Table::new(vec![
        Column::muted("SESSION"),
        Column::right("PID"),
        Column::left("NAME"),
    ]);

    for (session, name) in sessions {
        let pid = session
            .split_once('.')
            .map(|(pid, _)| pid.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.row(vec![session.clone(), pid, name.clone()]);
    }

    table.render(w);
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
