// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text matching and numeric validation for record search.
//!
//! Small, pure functions used by a record-management application to answer
//! "does this field match what the user typed?" and "is this field value
//! acceptable?".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  search.rs   │     │  numeric.rs  │
//! │ (normalize, │     │ (contains,   │     │ (integer,    │
//! │  guards)    │──┐  │  matches)    │     │  double,     │
//! └─────────────┘  │  └──────────────┘     │  decimals)   │
//!                  │  ┌──────────────┐     └──────────────┘
//!                  └─▶│  tokens.rs   │     ┌──────────────┐
//!                     │ (ordered     │     │diagnostics.rs│
//!                     │  windows)    │     │ (describe)   │
//!                     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │         error.rs  ·  contracts.rs (debug-only)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Absent inputs
//!
//! Text arguments are `impl Into<Option<&str>>`: pass a `&str` directly, or an
//! `Option<&str>` straight from an optional record field. `None` is never
//! treated as "no match"; it fails with [`ArgumentError::Missing`].
//!
//! # Usage
//!
//! ```
//! use fieldsift::{contains_ordered_substring, has_more_than_two_decimal_places, is_double};
//!
//! assert!(contains_ordered_substring("Alex Yeoh", "alex ye")?);
//! assert!(is_double("89.67")?);
//! assert!(!has_more_than_two_decimal_places("89.67")?);
//! # Ok::<(), fieldsift::ArgumentError>(())
//! ```

// Module declarations
pub mod contracts;
mod diagnostics;
mod error;
mod numeric;
mod search;
pub mod testing;
mod tokens;
mod utils;

// Re-exports for public API
pub use diagnostics::{describe, describe_error};
pub use error::{ArgumentError, ArgumentResult, NumberFormatError};
pub use numeric::{
    decimal_places, has_more_than_two_decimal_places, is_double, is_non_zero_unsigned_integer,
    parse_double, parse_non_zero_unsigned_integer, MAX_DECIMAL_PLACES,
};
pub use search::{contains_ignore_case, matches_ignore_case};
pub use tokens::{contains_ordered_substring, find_ordered_substring};
pub use utils::normalize;
