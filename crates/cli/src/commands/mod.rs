// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod codec;
pub mod logs;
pub mod paths;
pub mod session;
pub mod start;
