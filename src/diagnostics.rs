// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render errors into a single string for log lines.
//!
//! Layout is always the error's own message, a newline, then the full report:
//!
//! ```text
//! score must be numeric
//! score must be numeric
//!
//! Caused by:
//!     invalid digit at position 2
//!
//! Stack backtrace:
//!    0: ...
//! ```
//!
//! The backtrace section only appears when one was captured (`RUST_BACKTRACE`
//! or `RUST_LIB_BACKTRACE` set when the `anyhow::Error` was created).

use std::error::Error as StdError;

use crate::error::{ArgumentError, ArgumentResult};

/// Message, newline, then anyhow's full report (cause chain and backtrace).
///
/// ```
/// use anyhow::anyhow;
/// use fieldsift::describe;
///
/// let err = anyhow!("record not found").context("loading record 7");
/// let text = describe(&err).unwrap();
/// assert!(text.starts_with("loading record 7\n"));
/// assert!(text.contains("record not found"));
/// ```
pub fn describe<'a>(error: impl Into<Option<&'a anyhow::Error>>) -> ArgumentResult<String> {
    let error = error.into().ok_or(ArgumentError::Missing { name: "error" })?;
    Ok(format!("{}\n{:?}", error, error))
}

/// Same layout as [`describe`] for a plain `std` error, without a backtrace.
///
/// Each source in the chain gets its own `Caused by:` line.
pub fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut out = format!("{}\n{}", error, error);
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    out
}
