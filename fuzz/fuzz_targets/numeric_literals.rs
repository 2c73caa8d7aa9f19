// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the numeric validators.
//!
//! Every literal must get a verdict without panicking, and the verdicts must
//! agree with the typed parsers and with the standard library where they
//! overlap.

#![no_main]

use fieldsift::{
    decimal_places, has_more_than_two_decimal_places, is_double, is_non_zero_unsigned_integer,
    parse_double, parse_non_zero_unsigned_integer,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let literal: String = String::from_utf8_lossy(data).chars().take(64).collect();
    let literal = literal.as_str();

    let integer = is_non_zero_unsigned_integer(literal).expect("present input");
    let double = is_double(literal).expect("present input");
    let over = has_more_than_two_decimal_places(literal).expect("present input");

    // INVARIANT 1: boolean verdicts agree with the typed parsers
    assert_eq!(integer, parse_non_zero_unsigned_integer(literal).is_ok());
    assert_eq!(double, parse_double(literal).is_ok());
    assert_eq!(over, decimal_places(literal).is_some_and(|p| p > 2));

    // INVARIANT 2: accepted integers are positive i32 values without a sign
    if integer {
        assert!(!literal.starts_with('+'));
        assert!(literal.parse::<i32>().is_ok_and(|v| v > 0));
        // Every accepted integer is also a valid decimal
        assert!(double);
    }

    // INVARIANT 3: accepted decimals are never special literals
    if double {
        let value = literal.parse::<f64>().expect("accepted decimal parses in std");
        assert!(!value.is_nan());
    }
});
