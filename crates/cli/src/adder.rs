// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The addition operation.

/// Adds two numbers.
///
/// Overflow follows Rust's native `i64` semantics: a panic in debug builds,
/// wraparound in release builds.
///
/// ```
/// assert_eq!(adder::sum(3, 5), 8);
/// ```
pub const fn sum(x: i64, y: i64) -> i64 {
    x + y
}

#[cfg(test)]
#[path = "adder_tests.rs"]
mod tests;
