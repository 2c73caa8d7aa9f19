// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for argument guards and numeric parsing.
//!
//! Two families, which surface differently:
//!
//! - [`ArgumentError`] is always returned to the caller. It means the caller
//!   broke a precondition (absent input, empty query).
//! - [`NumberFormatError`] explains why a literal was rejected. The boolean
//!   validators collapse it to `false`; only the `parse_*` functions return it.

use thiserror::Error;

/// A precondition on a function argument was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required input was absent.
    #[error("argument `{name}` must not be missing")]
    Missing { name: &'static str },

    /// A query was empty after lower-casing and trimming.
    #[error("argument `{name}` cannot be empty")]
    EmptyQuery { name: &'static str },
}

/// Why a raw string is not an acceptable numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberFormatError {
    /// The literal has no characters.
    #[error("empty literal")]
    Empty,

    /// An explicit sign where none is allowed.
    #[error("sign character not allowed")]
    Sign,

    /// A character that is not an ASCII digit, at the given byte offset.
    #[error("invalid digit at position {position}")]
    InvalidDigit { position: usize },

    /// The value does not fit the target integer range.
    #[error("value out of range")]
    Overflow,

    /// The value is zero where a positive number is required.
    #[error("value must be greater than zero")]
    Zero,

    /// The literal breaks the decimal grammar at the given byte offset.
    #[error("malformed decimal literal at position {position}")]
    Malformed { position: usize },
}

/// Result type for argument-checked operations.
pub type ArgumentResult<T> = Result<T, ArgumentError>;
