// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validators for numeric form fields (identifiers, scores).
//!
//! Numeric literals are taken raw: no trimming, no case folding. Each validator
//! has a boolean form that answers "is this acceptable?" and, where the reason
//! matters, a `parse_*` form that says why not.
//!
//! ```text
//! "42"      is_non_zero_unsigned_integer  true
//! "+42"     is_non_zero_unsigned_integer  false (Sign)
//! "6.022e23" is_double                    true
//! "NaN"     is_double                     false (Malformed)
//! "89.675"  has_more_than_two_decimal_places  true
//! ```

use tracing::trace;

use crate::contracts::check_decimal_scan;
use crate::error::{ArgumentResult, NumberFormatError};
use crate::utils::require;

/// Scores may carry at most this many digits after the decimal point.
pub const MAX_DECIMAL_PLACES: usize = 2;

// ============================================================================
// UNSIGNED INTEGERS
// ============================================================================

/// Parse a non-zero unsigned integer: ASCII digits only, value in `1..=i32::MAX`.
///
/// Leading zeros are accepted (`"007"` is 7). Any sign character is rejected,
/// including `+`.
pub fn parse_non_zero_unsigned_integer(value: &str) -> Result<u32, NumberFormatError> {
    let bytes = value.as_bytes();
    match bytes.first() {
        None => return Err(NumberFormatError::Empty),
        Some(b'+' | b'-') => return Err(NumberFormatError::Sign),
        Some(_) => {}
    }

    let mut acc: i32 = 0;
    for (position, &byte) in bytes.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(NumberFormatError::InvalidDigit { position });
        }
        acc = acc
            .checked_mul(10)
            .and_then(|n| n.checked_add(i32::from(byte - b'0')))
            .ok_or(NumberFormatError::Overflow)?;
    }

    if acc == 0 {
        return Err(NumberFormatError::Zero);
    }
    Ok(acc.unsigned_abs())
}

/// Is `value` a non-zero unsigned integer, e.g. `1`, `2`, ..., `2147483647`?
///
/// False for any other present string: `""`, `"-1"`, `"0"`, `"+1"`,
/// `" 2 "` (untrimmed), `"3 0"` (whitespace), `"1a"` (letters).
///
/// ```
/// use fieldsift::is_non_zero_unsigned_integer;
///
/// assert!(is_non_zero_unsigned_integer("2147483647").unwrap());
/// assert!(!is_non_zero_unsigned_integer("+1").unwrap());
/// assert!(is_non_zero_unsigned_integer(None).is_err());
/// ```
pub fn is_non_zero_unsigned_integer<'a>(value: impl Into<Option<&'a str>>) -> ArgumentResult<bool> {
    let value = require(value.into(), "value")?;
    Ok(accept(value, parse_non_zero_unsigned_integer(value), "unsigned integer"))
}

// ============================================================================
// DECIMALS
// ============================================================================

/// Parse a finite decimal literal.
///
/// Grammar: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`.
///
/// `NaN`, `inf`, `Infinity`, hexadecimal floats, type suffixes (`1.0f`) and
/// surrounding whitespace are all rejected. Literals that are grammatical but
/// too large for `f64` (`"1e999"`) are accepted and parse to infinity.
pub fn parse_double(value: &str) -> Result<f64, NumberFormatError> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return Err(NumberFormatError::Empty);
    }

    let mut pos = 0;
    if matches!(bytes[pos], b'+' | b'-') {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return Err(NumberFormatError::Malformed { position: pos });
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return Err(NumberFormatError::Malformed { position: pos });
        }
        pos += exp_digits;
    }

    if pos != bytes.len() {
        return Err(NumberFormatError::Malformed { position: pos });
    }

    // The scan above admits a subset of what `f64::from_str` accepts.
    value
        .parse::<f64>()
        .map_err(|_| NumberFormatError::Malformed { position: 0 })
}

/// Is `value` a decimal number, e.g. `123.45`, `-0.123`, `6.022e23`?
///
/// False for `""`, `"abc"`, `"+"`, `"-"`, `"1.2.3"` and the special literals
/// listed on [`parse_double`].
pub fn is_double<'a>(value: impl Into<Option<&'a str>>) -> ArgumentResult<bool> {
    let value = require(value.into(), "value")?;
    Ok(accept(value, parse_double(value), "decimal"))
}

/// Number of characters after the first `.`, or `None` without one.
///
/// The characters are not required to be digits.
pub fn decimal_places(value: &str) -> Option<usize> {
    let dot = value.find('.')?;
    let places = value[dot + 1..].chars().count();
    check_decimal_scan(value, dot, places);
    Some(places)
}

/// Does `value` have more than [`MAX_DECIMAL_PLACES`] characters after its first `.`?
///
/// Used to reject over-precise scores such as `100.001`. False for `"100."`,
/// `"80.5"`, `"89.67"` and anything without a dot.
///
/// The suffix is counted, not validated: `"1.abc"` reports true. Pair this
/// with [`is_double`] to reject non-numeric input.
pub fn has_more_than_two_decimal_places<'a>(
    value: impl Into<Option<&'a str>>,
) -> ArgumentResult<bool> {
    let value = require(value.into(), "value")?;
    let over = decimal_places(value).is_some_and(|places| places > MAX_DECIMAL_PLACES);
    trace!(value, over, "decimal place check");
    Ok(over)
}

// ============================================================================
// HELPERS
// ============================================================================

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Collapse a parse outcome to a verdict, logging the rejection reason.
fn accept<T>(value: &str, parsed: Result<T, NumberFormatError>, kind: &str) -> bool {
    match parsed {
        Ok(_) => true,
        Err(reason) => {
            trace!(value, kind, %reason, "rejected numeric literal");
            false
        }
    }
}
