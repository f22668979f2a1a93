// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nsc start-cmd` - Write a worker's screen config and print its start command

use anyhow::Result;
use clap::Args;
use ns_adapters::{build_start_command, ScreenConfig};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct StartArgs {
    /// Worker name (e.g. /arm/driver)
    pub name: String,

    /// Environment value to forward into the session (KEY=VALUE)
    #[arg(short = 'e', long = "env", value_parser = parse_key_val)]
    pub env: Vec<(String, String)>,

    /// Extra variable to forward from the host environment
    #[arg(short = 'k', long = "key")]
    pub keys: Vec<String>,
}

/// Parse a `KEY=VALUE` pair. The value may be empty or contain `=` but
/// not a line break.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    if s.contains(['\n', '\r']) {
        return Err(format!("line break in '{}'", s.escape_default()));
    }
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing variable name in '{}'", s)),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

pub fn handle(config: &ScreenConfig, args: StartArgs, format: OutputFormat) -> Result<()> {
    let command = build_start_command(config, &args.name, &args.env, &args.keys)?;
    match format {
        OutputFormat::Text => println!("{}", command),
        OutputFormat::Json => print_json(&serde_json::json!({
            "program": command.program,
            "args": command.args(),
            "config_file": command.config_file,
            "session_name": command.session_name,
        }))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "start_tests.rs"]
mod tests;
