// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sum command implementation.

use std::io::Write;

use anyhow::Context;

use adder::cli::Cli;
use adder::config::{self, Config};
use adder::{discovery, report};

/// Run the sum command.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    if let (Some(path), Some(_), Some(_)) = (&cli.config, cli.x, cli.y) {
        tracing::warn!(
            "ignoring [demo] operands from {}: operands given on the command line",
            path.display()
        );
    }

    let operands = cli.operands(&config);
    let result = adder::sum(operands.x, operands.y);
    tracing::debug!("sum({}, {}) = {}", operands.x, operands.y, result);

    let line = report::render(cli.output, operands, result)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line).context("failed to write result")?;
    Ok(())
}

/// Explicit `--config` wins; otherwise discover adder.toml from the cwd.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(ref path) = cli.config {
        return Ok(config::load(path)?);
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    match discovery::find_config(&cwd) {
        Some(path) => Ok(config::load(&path)?),
        None => {
            tracing::debug!("no {} found, using defaults", config::CONFIG_FILE);
            Ok(Config::default())
        }
    }
}
