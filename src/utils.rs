// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing and argument guards.

use crate::error::{ArgumentError, ArgumentResult};

/// Normalize a string for matching: lowercase, then trim surrounding whitespace.
///
/// Interior whitespace is left alone: the ordered token matcher needs runs of
/// spaces to survive normalization.
///
/// - "  ABc Def " → "abc def"
/// - "Ünïcode" → "ünïcode"
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Unwrap a possibly-absent argument, naming it in the error.
#[inline]
pub(crate) fn require<'a>(value: Option<&'a str>, name: &'static str) -> ArgumentResult<&'a str> {
    value.ok_or(ArgumentError::Missing { name })
}

/// Normalize a query and reject it if nothing is left.
pub(crate) fn require_query(value: Option<&str>, name: &'static str) -> ArgumentResult<String> {
    let prepped = normalize(require(value, name)?);
    if prepped.is_empty() {
        return Err(ArgumentError::EmptyQuery { name });
    }
    Ok(prepped)
}
