// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Adds two integers and prints the result
#[derive(Parser)]
#[command(name = "adder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// First operand (defaults to the configured demo operand)
    #[arg(value_name = "X", allow_negative_numbers = true, requires = "y")]
    pub x: Option<i64>,

    /// Second operand
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub y: Option<i64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "ADDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the operands to add.
    ///
    /// Positional operands win over the config's demo operands.
    pub fn operands(&self, config: &Config) -> Operands {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Operands { x, y },
            _ => Operands {
                x: config.demo.x,
                y: config.demo.y,
            },
        }
    }
}

/// The pair of integers handed to [`crate::sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
