// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the fallible paths around [`crate::sum`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "unsupported config version {} in {} (expected {})",
        .version,
        .path.display(),
        crate::config::CONFIG_VERSION
    )]
    UnsupportedVersion { path: PathBuf, version: u32 },
    #[error("failed to serialize result")]
    Serialize(#[from] serde_json::Error),
}
