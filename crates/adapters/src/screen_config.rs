// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen config file generation and the start command built around it.
//!
//! The config file is passed to `screen -c` and seeds the session:
//!
//! ```text
//! logfile /home/ros/.ros/log/_ns_talker.log
//! logfile flush 0
//! defscrollback 10000
//! setenv ROS_NAMESPACE /ns
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use ns_core::{config_file_path, encode_session_name, log_file_path, ArtifactKey};
use serde::Serialize;

use crate::config::ScreenConfig;
use crate::env;

/// Scrollback lines kept by each session.
pub const SCROLLBACK_LINES: u32 = 10000;

/// Variables always forwarded into the session, after caller-requested ones.
pub const FORWARDED_ENV: &[&str] = &[
    "LD_LIBRARY_PATH",
    "ROS_ETC_DIR",
    "ROS_MASTER_URI",
    "ROS_HOSTNAME",
    "ROS_NAMESPACE",
    "ROSCONSOLE_FORMAT",
    "ROSCONSOLE_CONFIG_FILE",
    "RESPAWN_DELAY",
    "RESPAWN_MAX",
    "RESPAWN_MIN_RUNTIME",
];

/// Command line that starts a detached, logged screen session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartCommand {
    pub program: PathBuf,
    pub config_file: PathBuf,
    pub session_name: String,
}

impl StartCommand {
    /// Arguments after the program: `-c <config> -L -dmS <session>`.
    pub fn args(&self) -> Vec<String> {
        vec![
            "-c".to_string(),
            self.config_file.display().to_string(),
            "-L".to_string(),
            "-dmS".to_string(),
            self.session_name.clone(),
        ]
    }
}

/// Renders a shell command line; words outside the safe set are single-quoted.
impl std::fmt::Display for StartCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", shell_quote(&self.program.display().to_string()))?;
        for arg in self.args() {
            write!(f, " {}", shell_quote(&arg))?;
        }
        Ok(())
    }
}

fn shell_quote(word: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "_-./=:,+@%~".contains(c);
    if !word.is_empty() && word.chars().all(safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Write the screen config for `worker` and return the command that uses it.
///
/// Each name in `extra_keys` and [`FORWARDED_ENV`] becomes a `setenv` line
/// when it has a non-empty value in `caller_env`, or else in the host
/// environment. Names without a value are skipped.
pub fn build_start_command(
    config: &ScreenConfig,
    worker: &str,
    caller_env: &[(String, String)],
    extra_keys: &[String],
) -> std::io::Result<StartCommand> {
    build_start_command_with(config, worker, caller_env, extra_keys, env::host_var)
}

pub(crate) fn build_start_command_with(
    config: &ScreenConfig,
    worker: &str,
    caller_env: &[(String, String)],
    extra_keys: &[String],
    host_env: impl Fn(&str) -> Option<String>,
) -> std::io::Result<StartCommand> {
    let key = ArtifactKey::Worker(worker);
    let config_file = config_file_path(config.log_root(), key);
    let log_file = log_file_path(config.log_root(), key);

    let keys = forwarded_keys(extra_keys);
    let contents = render_screen_config(&log_file, &keys, caller_env, host_env);
    write_config_file(&config_file, &contents)?;
    tracing::debug!(
        worker,
        config_file = %config_file.display(),
        setenv_count = contents.lines().filter(|l| l.starts_with("setenv ")).count(),
        "wrote screen config"
    );

    Ok(StartCommand {
        program: config.screen_bin.clone(),
        config_file,
        session_name: encode_session_name(worker),
    })
}

/// Caller keys first, then the built-in list, without duplicates.
fn forwarded_keys(extra_keys: &[String]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::with_capacity(extra_keys.len() + FORWARDED_ENV.len());
    for key in extra_keys.iter().map(String::as_str).chain(FORWARDED_ENV.iter().copied()) {
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn caller_value<'a>(caller_env: &'a [(String, String)], key: &str) -> Option<&'a str> {
    caller_env
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// Render the screen config file contents.
pub fn render_screen_config(
    log_file: &Path,
    keys: &[&str],
    caller_env: &[(String, String)],
    host_env: impl Fn(&str) -> Option<String>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "logfile {}", log_file.display());
    let _ = writeln!(out, "logfile flush 0");
    let _ = writeln!(out, "defscrollback {}", SCROLLBACK_LINES);
    for key in keys {
        let value = match caller_value(caller_env, key) {
            Some(value) => Some(value.to_string()),
            None => host_env(key).filter(|v| !v.is_empty()),
        };
        // A line break would start a new screen directive.
        let value = value.filter(|v| {
            let single_line = !v.contains(['\n', '\r']);
            if !single_line {
                tracing::warn!(key, "skipping multi-line value");
            }
            single_line
        });
        if let Some(value) = value {
            let _ = writeln!(out, "setenv {} {}", key, value);
        }
    }
    out
}

fn write_config_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}

#[cfg(test)]
#[path = "screen_config_tests.rs"]
mod tests;
