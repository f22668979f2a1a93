// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ns-core: worker naming, screen session parsing and artifact paths

pub mod name;
pub mod paths;
pub mod session;

pub use name::{decode_session_name, encode_session_name, WorkerName, SLASH_SEP};
pub use paths::{
    config_file_path, log_file_path, pid_file_path, raw_log_file_path, ArtifactKey,
    ArtifactPaths, UNKNOWN_SESSION,
};
pub use session::{parse_session_list, split_session_id, ParseSessionIdError, SessionId};
