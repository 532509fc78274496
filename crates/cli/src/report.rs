// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result rendering for the `adder` binary.

use serde_json::json;

use crate::cli::{Operands, OutputFormat};
use crate::error::Error;

/// Render the result line, without a trailing newline.
pub fn render(format: OutputFormat, operands: Operands, result: i64) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(format!("The result is: {}", result)),
        OutputFormat::Json => {
            let value = json!({
                "x": operands.x,
                "y": operands.y,
                "result": result,
            });
            Ok(serde_json::to_string(&value)?)
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
