// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It keeps the canonical example tables in one place.

#![doc(hidden)]

/// Person names as they show up in a typical record list.
pub const SAMPLE_NAMES: &[&str] = &[
    "Alex Yeoh",
    "Bernice Yu",
    "Charlotte Oliveiro",
    "David Li",
    "Irfan Ibrahim",
    "Roy Balakrishnan",
    "Tan Ah Kow Benson",
    "Nguyễn Thị Minh Khai",
];

/// Canonical `(sentence, query, expected)` rows for the ordered token matcher.
pub fn ordered_cases() -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("ABc def", "abc", true),
        ("ABc def", "DEF", true),
        ("ABc def", "AB", true),
        ("ABc def", "de", true),
        ("ABc def", "dex", false),
        ("ABc def", "bc def", false),
        ("ABc def", "abc def", true),
        ("ABc def", "abc de", true),
        ("ABc def", "abc def ghi", false),
        ("Tan Ah Kow Benson", "ah kow", true),
        ("Tan Ah Kow Benson", "tan kow", false),
        ("Tan Ah Kow Benson", "kow ben", true),
    ]
}

/// Canonical `(sentence, query, expected)` rows for plain containment.
pub fn containment_cases() -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("abcd", "abc", true),
        ("ABc def", "bc def", true),
        ("ABc def", "C D", true),
        ("ABc def", "abcdef", false),
        ("Bernice Yu", "  YU ", true),
        ("Bernice Yu", "yue", false),
    ]
}

/// Canonical `(literal, expected)` rows for each numeric validator.
pub struct NumericCases {
    pub unsigned_integer: Vec<(&'static str, bool)>,
    pub double: Vec<(&'static str, bool)>,
    pub over_two_places: Vec<(&'static str, bool)>,
}

/// Build the canonical numeric tables.
pub fn numeric_cases() -> NumericCases {
    NumericCases {
        unsigned_integer: vec![
            ("0", false),
            ("-1", false),
            ("+1", false),
            ("", false),
            (" 2 ", false),
            ("3 0", false),
            ("1a", false),
            ("1", true),
            ("2147483647", true),
        ],
        double: vec![
            ("123.45", true),
            ("-0.123", true),
            ("6.022e23", true),
            ("abc", false),
            ("", false),
            ("1.2.3", false),
        ],
        over_two_places: vec![
            ("100.", false),
            ("80.5", false),
            ("89.67", false),
            ("100.001", true),
        ],
    }
}
