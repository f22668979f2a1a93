// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen session identifiers and `screen -ls` output parsing.
//!
//! `screen` names a session `<pid>.<name>`. In `screen -ls` output each
//! session sits on its own line, followed by tab-separated status text:
//!
//! ```text
//! There are screens on:
//!         4242._ns_talker (10/17/2026 09:12:03 AM)        (Detached)
//! 1 Socket in /run/screen/S-ros.
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::name::{decode_session_name, SLASH_SEP};

/// A running screen session: the `screen` process id plus the session-name
/// fragment produced by [`crate::encode_session_name`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId {
    pub pid: u32,
    pub fragment: String,
}

impl SessionId {
    pub fn new(pid: u32, fragment: impl Into<String>) -> Self {
        Self {
            pid,
            fragment: fragment.into(),
        }
    }

    /// Whether the fragment belongs to a named worker (`_`-prefixed).
    pub fn is_worker_session(&self) -> bool {
        self.fragment.starts_with(SLASH_SEP)
    }

    /// Decoded name of this session.
    ///
    /// Only worker sessions decode to an absolute worker name; foreign
    /// sessions (`pts-0.host`) come back unchanged apart from `_` handling.
    pub fn decoded_name(&self) -> String {
        decode_session_name(&self.fragment)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.pid, self.fragment)
    }
}

/// Error returned when a string is not exactly `<pid>.<fragment>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid session id: {0:?}")]
pub struct ParseSessionIdError(pub String);

impl FromStr for SessionId {
    type Err = ParseSessionIdError;

    /// Strict parse: no surrounding whitespace, no status text, non-empty
    /// fragment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pid, fragment) = s
            .split_once('.')
            .ok_or_else(|| ParseSessionIdError(s.to_string()))?;
        if fragment.is_empty() || fragment.contains(char::is_whitespace) {
            return Err(ParseSessionIdError(s.to_string()));
        }
        let pid = pid
            .parse::<u32>()
            .map_err(|_| ParseSessionIdError(s.to_string()))?;
        Ok(Self::new(pid, fragment))
    }
}

/// Split one line of `screen -ls` output into pid and fragment.
///
/// Returns `None` for anything that is not a session line: missing input,
/// no `.`, or a non-numeric pid. Status text after the first tab is
/// dropped and both parts are trimmed.
pub fn split_session_id(line: Option<&str>) -> Option<SessionId> {
    let (pid, rest) = line?.split_once('.')?;
    let pid = pid.trim().parse::<u32>().ok()?;
    let fragment = rest.split('\t').next().unwrap_or_default().trim();
    Some(SessionId::new(pid, fragment))
}

/// Parse `screen -ls` output into `"<pid>.<fragment>" -> decoded name`.
///
/// With an empty `filter`, every session line is returned. Otherwise only
/// worker sessions whose decoded name equals `filter` are kept.
pub fn parse_session_list(output: &str, filter: &str) -> BTreeMap<String, String> {
    let mut sessions = BTreeMap::new();
    for line in output.lines() {
        let Some(session) = split_session_id(Some(line)) else {
            continue;
        };
        if filter.is_empty() {
            let name = session.decoded_name();
            sessions.insert(session.to_string(), name);
        } else if session.is_worker_session() && session.decoded_name() == filter {
            sessions.insert(session.to_string(), filter.to_string());
        }
    }
    sessions
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
