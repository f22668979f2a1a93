// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for per-worker screen artifacts.
//!
//! All files live flat in the log root:
//!   `<log_root>/<session>.log`   screen's own log of the session
//!   `<log_root>/<session>.conf`  screen config written before start
//!   `<log_root>/<session>.pid`   pid file written by the worker wrapper
//!   `<log_root>/<ns_name>.log`   the worker's native log

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::name::{encode_session_name, SLASH_SEP};

/// Identifier used when neither a session nor a worker is known.
pub const UNKNOWN_SESSION: &str = "unknown";

/// Selects the file-name stem for a derived path.
///
/// A session name wins over a worker name; with neither, the
/// [`UNKNOWN_SESSION`] placeholder is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKey<'a> {
    /// A pre-built session name (`_ns_talker` or `4242._ns_talker`).
    Session(&'a str),
    /// A worker name, encoded with [`encode_session_name`].
    Worker(&'a str),
    Unknown,
}

impl<'a> ArtifactKey<'a> {
    pub fn from_options(session: Option<&'a str>, worker: Option<&'a str>) -> Self {
        match (session, worker) {
            (Some(session), _) => Self::Session(session),
            (None, Some(worker)) => Self::Worker(worker),
            (None, None) => Self::Unknown,
        }
    }

    fn stem(&self) -> String {
        match self {
            Self::Session(session) => (*session).to_string(),
            Self::Worker(worker) => encode_session_name(worker),
            Self::Unknown => UNKNOWN_SESSION.to_string(),
        }
    }
}

fn artifact_path(log_root: &Path, key: ArtifactKey<'_>, ext: &str) -> PathBuf {
    log_root.join(format!("{}.{}", key.stem(), ext))
}

/// Build the path to screen's log file for a session.
///
/// Structure: `{log_root}/{session}.log`
pub fn log_file_path(log_root: &Path, key: ArtifactKey<'_>) -> PathBuf {
    artifact_path(log_root, key, "log")
}

/// Build the path to the screen config file for a session.
///
/// Structure: `{log_root}/{session}.conf`
pub fn config_file_path(log_root: &Path, key: ArtifactKey<'_>) -> PathBuf {
    artifact_path(log_root, key, "conf")
}

/// Build the path to the pid file for a session.
///
/// Structure: `{log_root}/{session}.pid`
pub fn pid_file_path(log_root: &Path, key: ArtifactKey<'_>) -> PathBuf {
    artifact_path(log_root, key, "pid")
}

/// Build the path to the worker's own log file.
///
/// Structure: `{log_root}/{ns_name}.log`, where `ns_name` is the worker
/// name without leading/trailing `/` and with inner `/` replaced by `_`.
/// Unlike the session name, literal `_` are not escaped.
pub fn raw_log_file_path(log_root: &Path, worker: &str) -> PathBuf {
    let flat = worker.trim_matches('/').replace('/', &SLASH_SEP.to_string());
    log_root.join(format!("{}.log", flat))
}

/// The four artifact paths of one worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub log: PathBuf,
    pub config: PathBuf,
    pub pid: PathBuf,
    pub raw_log: PathBuf,
}

impl ArtifactPaths {
    pub fn for_worker(log_root: &Path, worker: &str) -> Self {
        let key = ArtifactKey::Worker(worker);
        Self {
            log: log_file_path(log_root, key),
            config: config_file_path(log_root, key),
            pid: pid_file_path(log_root, key),
            raw_log: raw_log_file_path(log_root, worker),
        }
    }

    /// All four paths, in deletion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.log, &self.config, &self.pid, &self.raw_log]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
