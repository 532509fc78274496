// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `adder.toml` for the current project.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Search `start_dir` and its ancestors for adder.toml.
///
/// The search ends at the first directory holding a `.git` entry, after
/// that directory itself has been checked.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("found config {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
