// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `adder.toml` configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Config file name looked up by [`crate::discovery::find_config`].
pub const CONFIG_FILE: &str = "adder.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version (optional, must be 1 when set).
    #[serde(default)]
    pub version: Option<u32>,

    /// Operands used when none are given on the command line.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demonstration operands.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "DemoConfig::default_x")]
    pub x: i64,

    #[serde(default = "DemoConfig::default_y")]
    pub y: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            x: Self::default_x(),
            y: Self::default_y(),
        }
    }
}

impl DemoConfig {
    pub(crate) fn default_x() -> i64 {
        3
    }

    pub(crate) fn default_y() -> i64 {
        5
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse config content. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, Error> {
    let config: Config = toml::from_str(content).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(version) = config.version
        && version != CONFIG_VERSION
    {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            version,
        });
    }

    tracing::debug!("loaded config {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
