// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nsc clean` and `nsc logs` - Log root housekeeping

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ns_adapters::{delete_artifacts, log_dir_size, purge_log_dir};

use crate::output::{format_bytes, print_json, OutputFormat};

#[derive(Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// Show the total size of the log directory
    Du,
    /// Remove everything inside the log directory
    Purge,
}

/// Delete the log, config, pid and raw log files of worker `name`.
pub fn clean(log_root: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let removed = delete_artifacts(log_root, name)
        .with_context(|| format!("failed to clean artifacts of {}", name))?;

    match format {
        OutputFormat::Text => print!("{}", format_removed(name, &removed)),
        OutputFormat::Json => print_json(&serde_json::json!({
            "name": name,
            "removed": removed,
        }))?,
    }
    Ok(())
}

pub fn handle(command: LogsCommand, log_root: &Path, format: OutputFormat) -> Result<()> {
    match command {
        LogsCommand::Du => {
            let bytes = log_dir_size(log_root)
                .with_context(|| format!("failed to measure {}", log_root.display()))?;
            match format {
                OutputFormat::Text => {
                    println!("{}\t{}", format_bytes(bytes), log_root.display())
                }
                OutputFormat::Json => print_json(&serde_json::json!({
                    "log_root": log_root,
                    "bytes": bytes,
                }))?,
            }
        }
        LogsCommand::Purge => {
            let count = purge_log_dir(log_root)
                .with_context(|| format!("failed to purge {}", log_root.display()))?;
            match format {
                OutputFormat::Text => {
                    println!("Purged {} entries from {}", count, log_root.display())
                }
                OutputFormat::Json => print_json(&serde_json::json!({
                    "log_root": log_root,
                    "purged": count,
                }))?,
            }
        }
    }
    Ok(())
}

fn format_removed(name: &str, removed: &[PathBuf]) -> String {
    if removed.is_empty() {
        return format!("Nothing to clean for {}\n", name);
    }
    removed
        .iter()
        .map(|path| format!("Removed {}\n", path.display()))
        .collect()
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
