// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the fieldsift numeric scanners.
//!
//! This standalone crate extracts the byte-level scanners behind the numeric
//! validators and proves them over every input up to a bounded length.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither scanner panics on any byte sequence
//! 2. **Sign rejection**: a leading `+` or `-` is never an unsigned integer
//! 3. **Positivity**: an accepted unsigned integer is in `1..=i32::MAX`
//! 4. **Place bound**: the decimal-place count never exceeds the input length

/// Longest literal the proofs explore.
pub const MAX_LITERAL_BYTES: usize = 6;

// ============================================================================
// UNSIGNED INTEGER SCAN (copied from src/numeric.rs)
// ============================================================================

/// Why a literal is not a non-zero unsigned integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanError {
    Empty,
    Sign,
    InvalidDigit,
    Overflow,
    Zero,
}

/// Parse ASCII digits into a positive `i32`-range value.
pub fn scan_unsigned(bytes: &[u8]) -> Result<u32, ScanError> {
    match bytes.first() {
        None => return Err(ScanError::Empty),
        Some(b'+' | b'-') => return Err(ScanError::Sign),
        Some(_) => {}
    }

    let mut acc: i32 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(ScanError::InvalidDigit);
        }
        acc = acc
            .checked_mul(10)
            .and_then(|n| n.checked_add(i32::from(byte - b'0')))
            .ok_or(ScanError::Overflow)?;
    }

    if acc == 0 {
        return Err(ScanError::Zero);
    }
    Ok(acc.unsigned_abs())
}

// ============================================================================
// DECIMAL PLACE SCAN (byte version of src/numeric.rs)
// ============================================================================

/// Bytes after the first `.`, or `None` without one.
pub fn scan_decimal_places(bytes: &[u8]) -> Option<usize> {
    let dot = bytes.iter().position(|&b| b == b'.')?;
    Some(bytes.len() - dot - 1)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn symbolic_literal(buf: &mut [u8; MAX_LITERAL_BYTES]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LITERAL_BYTES);
        for i in 0..len {
            buf[i] = kani::any();
        }
        len
    }

    /// Verify scan_unsigned never panics and only accepts positive values.
    #[kani::proof]
    #[kani::unwind(8)] // MAX_LITERAL_BYTES + 2
    fn verify_scan_unsigned_bounds() {
        let mut buf = [0u8; MAX_LITERAL_BYTES];
        let len = symbolic_literal(&mut buf);
        let slice = &buf[..len];

        if let Ok(value) = scan_unsigned(slice) {
            kani::assert(value > 0, "accepted value must be positive");
            kani::assert(value <= i32::MAX as u32, "accepted value must fit i32");
            kani::assert(
                slice.iter().all(|b| b.is_ascii_digit()),
                "accepted literal must be all digits",
            );
        }
    }

    /// Verify any signed literal is rejected.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_scan_unsigned_rejects_sign() {
        let mut buf = [0u8; MAX_LITERAL_BYTES];
        let len = symbolic_literal(&mut buf);
        kani::assume(len > 0);
        kani::assume(buf[0] == b'+' || buf[0] == b'-');

        kani::assert(
            matches!(scan_unsigned(&buf[..len]), Err(ScanError::Sign)),
            "signed literal must be rejected with Sign",
        );
    }

    /// Verify the decimal-place count is bounded by the input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_decimal_places_bounded() {
        let mut buf = [0u8; MAX_LITERAL_BYTES];
        let len = symbolic_literal(&mut buf);
        let slice = &buf[..len];

        match scan_decimal_places(slice) {
            Some(places) => {
                kani::assert(places < len, "places must leave room for the dot");
                kani::assert(slice.contains(&b'.'), "count implies a dot");
            }
            None => kani::assert(!slice.contains(&b'.'), "no count implies no dot"),
        }
    }
}
