// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations written straight from the
//! matching rules. They are slow and allocate freely; that is fine, they only
//! serve as ground truth for the library functions.

#![allow(dead_code)]

/// Containment oracle: lowercase, trim, substring.
pub fn oracle_contains(sentence: &str, query: &str) -> bool {
    sentence
        .to_lowercase()
        .trim()
        .contains(query.to_lowercase().trim())
}

/// Ordered-token oracle.
///
/// Walks every offset and compares token by token: all query tokens but the
/// last must be equal to their sentence token, the last must be a prefix.
pub fn oracle_ordered(sentence: &str, query: &str) -> Option<usize> {
    let sentence = sentence.to_lowercase();
    let query = query.to_lowercase();
    let s: Vec<&str> = sentence.trim().split(' ').map(str::trim).collect();
    let q: Vec<&str> = query.split_whitespace().collect();
    if q.is_empty() || q.len() > s.len() {
        return None;
    }

    let last = q.len() - 1;
    (0..=s.len() - q.len()).find(|&i| {
        q.iter().enumerate().all(|(j, token)| {
            if j == last {
                s[i + j].starts_with(token)
            } else {
                s[i + j] == *token
            }
        })
    })
}

/// Unsigned-integer oracle: ASCII digits only, then let std decide the range.
pub fn oracle_unsigned(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && s.parse::<i32>().map(|v| v > 0).unwrap_or(false)
}

/// Decimal-places oracle: characters after the first dot.
pub fn oracle_over_two_places(s: &str) -> bool {
    match s.split_once('.') {
        Some((_, frac)) => frac.chars().count() > 2,
        None => false,
    }
}
