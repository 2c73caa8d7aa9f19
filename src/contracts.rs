// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matchers.
//!
//! Debug-mode assertions that pin down the properties the matchers rely on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** when a refactor breaks an invariant during tests
//!
//! | Contract Function       | Property                                          |
//! |-------------------------|---------------------------------------------------|
//! | `check_normalized`      | normalized text is a fixed point of `normalize`   |
//! | `check_window_range`    | window width fits the token sequence              |
//! | `check_match_offset`    | reported window really starts with the query      |
//! | `check_decimal_scan`    | decimal-place count stays inside the input        |

use crate::utils::normalize;

// ============================================================================
// NORMALIZATION CONTRACTS
// ============================================================================

/// Check that `value` is already normalized.
///
/// INVARIANT: `normalize(normalize(s)) == normalize(s)`.
///
/// # Panics (debug builds only)
/// Panics if normalizing `value` again changes it.
#[inline]
pub fn check_normalized(value: &str) {
    debug_assert!(
        normalize(value) == value,
        "Contract violation: normalize not idempotent for {:?}",
        value
    );
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check that a sliding window of `width` tokens fits in `token_count` tokens.
///
/// INVARIANT: offsets scanned are exactly `0..=token_count - width`.
///
/// # Panics (debug builds only)
/// Panics if `width` is zero or larger than `token_count`.
#[inline]
pub fn check_window_range(token_count: usize, width: usize) {
    debug_assert!(width > 0, "Contract violation: window width is zero");
    debug_assert!(
        width <= token_count,
        "Contract violation: window width {} > token count {}",
        width,
        token_count
    );
}

/// Check that the window at `offset` really starts with `query_joined`.
///
/// INVARIANT: a reported offset is in range and its rendered window has the
/// joined query as a prefix.
///
/// # Panics (debug builds only)
/// Panics if the offset is out of range or the window does not match.
#[inline]
pub fn check_match_offset(tokens: &[&str], width: usize, offset: usize, query_joined: &str) {
    debug_assert!(
        offset + width <= tokens.len(),
        "Contract violation: match offset {} + width {} > token count {}",
        offset,
        width,
        tokens.len()
    );

    if cfg!(debug_assertions) && offset + width <= tokens.len() {
        let rendered: String = tokens[offset..offset + width]
            .iter()
            .flat_map(|t| [*t, " "])
            .collect();
        debug_assert!(
            rendered.starts_with(query_joined),
            "Contract violation: window {:?} at offset {} does not start with {:?}",
            rendered,
            offset,
            query_joined
        );
    }
}

// ============================================================================
// NUMERIC CONTRACTS
// ============================================================================

/// Check that a decimal-place count is consistent with the input.
///
/// INVARIANT: the fractional suffix never counts more characters than follow
/// the dot.
///
/// # Panics (debug builds only)
/// Panics if `places` exceeds the characters after byte `dot`.
#[inline]
pub fn check_decimal_scan(input: &str, dot: usize, places: usize) {
    debug_assert!(
        input.as_bytes().get(dot) == Some(&b'.'),
        "Contract violation: byte {} of {:?} is not a dot",
        dot,
        input
    );
    debug_assert!(
        places <= input.len() - dot - 1,
        "Contract violation: {} places after dot at {} in {:?}",
        places,
        dot,
        input
    );
}
