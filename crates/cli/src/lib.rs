// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integer addition with a small demonstration CLI.
//!
//! The library surface is [`sum`]. The remaining modules back the `adder`
//! binary: argument parsing, config discovery, and result rendering.

pub mod adder;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use adder::sum;
pub use error::Error;
