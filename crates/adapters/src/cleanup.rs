// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Removal of worker artifacts and log-root maintenance.

use std::io;
use std::path::{Path, PathBuf};

use ns_core::ArtifactPaths;
use walkdir::WalkDir;

/// Delete the screen log, config, pid file and native log of `worker`.
///
/// Files that do not exist are skipped. Stops at the first other failure,
/// leaving the remaining files in place. Returns the removed paths.
pub fn delete_artifacts(log_root: &Path, worker: &str) -> io::Result<Vec<PathBuf>> {
    delete_artifacts_with(log_root, worker, |path| std::fs::remove_file(path))
}

pub(crate) fn delete_artifacts_with(
    log_root: &Path,
    worker: &str,
    remove: impl Fn(&Path) -> io::Result<()>,
) -> io::Result<Vec<PathBuf>> {
    let paths = ArtifactPaths::for_worker(log_root, worker);
    let mut removed = Vec::new();
    for path in paths.iter() {
        if !path.is_file() {
            continue;
        }
        match remove(path) {
            Ok(()) => removed.push(path.to_path_buf()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(worker, path = %path.display(), error = %e, "failed to remove artifact");
                return Err(e);
            }
        }
    }
    tracing::debug!(worker, removed = removed.len(), "deleted worker artifacts");
    Ok(removed)
}

/// Total size in bytes of all regular files below `log_root`.
///
/// A symlinked root is followed; links below it are not. A missing root
/// has size 0.
pub fn log_dir_size(log_root: &Path) -> io::Result<u64> {
    match std::fs::metadata(log_root) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    }

    let mut size = 0u64;
    for entry in WalkDir::new(log_root)
        .follow_links(false)
        .follow_root_links(true)
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            size += entry.metadata().map_err(io::Error::from)?.len();
        }
    }
    Ok(size)
}

/// Remove everything inside `log_root`, keeping the directory itself.
///
/// Running workers keep logging into the root, so it must survive the
/// purge. A missing root is a no-op. Returns the number of removed entries.
pub fn purge_log_dir(log_root: &Path) -> io::Result<usize> {
    let entries = match std::fs::read_dir(log_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let mut count = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
        count += 1;
    }
    tracing::info!(log_root = %log_root.display(), count, "purged log directory");
    Ok(count)
}

#[cfg(test)]
#[path = "cleanup_tests.rs"]
mod tests;
