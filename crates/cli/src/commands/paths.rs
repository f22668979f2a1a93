// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nsc paths` - Artifact locations for a worker

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ns_core::ArtifactPaths;

use crate::color;
use crate::output::{print_json, OutputFormat};

pub fn handle(log_root: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let paths = ArtifactPaths::for_worker(log_root, name);
    match format {
        OutputFormat::Text => format_paths(&mut std::io::stdout(), &paths),
        OutputFormat::Json => print_json(&paths)?,
    }
    Ok(())
}

fn format_paths(w: &mut impl Write, paths: &ArtifactPaths) {
    let rows = [
        ("log", &paths.log),
        ("config", &paths.config),
        ("pid", &paths.pid),
        ("raw_log", &paths.raw_log),
    ];
    for (label, path) in rows {
        let _ = writeln!(
            w,
            "{} {}",
            color::header(&format!("{:<8}", label)),
            path.display()
        );
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
