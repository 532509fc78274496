//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the adder binary.
///
/// Clears the variables the binary reads so the host environment cannot
/// leak into a spec.
pub fn adder_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adder"));
    cmd.env_remove("ADDER_CONFIG").env_remove("ADDER_LOG");
    cmd
}

/// Temp directory with a `.git` marker so config discovery stops inside it.
pub fn empty_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp directory with the given adder.toml content.
pub fn project_with_config(config: &str) -> TempDir {
    let dir = empty_project();
    std::fs::write(dir.path().join("adder.toml"), config).unwrap();
    dir
}
