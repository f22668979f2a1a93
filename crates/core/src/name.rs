// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker names and the session-name codec.
//!
//! Worker names are slash-delimited namespace paths (`/group/worker`).
//! `screen` session names must be flat, so every `/` is replaced by
//! [`SLASH_SEP`]. Literal [`SLASH_SEP`] characters already present in the
//! name are doubled first so that the flattening can be reversed:
//!
//! ```text
//! /group/my_worker  --encode-->  _group_my__worker
//! _group_my__worker --decode-->  /group/my_worker
//! ```
//!
//! Decoding pairs delimiters greedily from the left. A component that starts
//! with [`SLASH_SEP`] (`/a/_b`) encodes to the same fragment as a component
//! that ends with one (`/a_/b`) and decodes to the latter.

use serde::{Deserialize, Serialize};

/// Character that replaces `/` in session names.
pub const SLASH_SEP: char = '_';

const DOUBLE_SEP: &str = "__";
const SEP: &str = "_";

/// A hierarchical worker name, absolute (`/ns/name`) unless private (`~name`).
///
/// The empty name is kept empty and stands for "no worker".
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerName(String);

impl WorkerName {
    /// Create a worker name, prefixing `/` when missing.
    ///
    /// Private names (`~name`) are kept as given, like ROS `ns_join`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() || name.starts_with('/') || name.starts_with('~') {
            Self(name)
        } else {
            Self(format!("/{}", name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The flat session-name fragment for this worker.
    pub fn session_name(&self) -> String {
        encode_session_name(&self.0)
    }

    /// Consume the newtype, returning the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for WorkerName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for WorkerName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WorkerName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for WorkerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for WorkerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WorkerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Flatten a worker name into a `screen` session-name fragment.
///
/// Returns an empty string for an empty name. Relative names are treated
/// as absolute.
pub fn encode_session_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let absolute = WorkerName::new(name);
    // Doubling must happen before `/` is replaced, otherwise the
    // separators introduced here would be doubled too.
    absolute.as_str().replace(SEP, DOUBLE_SEP).replace('/', SEP)
}

/// Reverse [`encode_session_name`].
///
/// Never fails; fragments that were not produced by the encoder decode to a
/// best-effort name.
pub fn decode_session_name(fragment: &str) -> String {
    fragment
        .replace(DOUBLE_SEP, "//")
        .replace(SEP, "/")
        .replace("//", SEP)
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
