// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeric validators through the public API.

use super::common::{assert_missing, numeric_cases};
use fieldsift::{
    decimal_places, has_more_than_two_decimal_places, is_double, is_non_zero_unsigned_integer,
    parse_double, parse_non_zero_unsigned_integer, NumberFormatError, MAX_DECIMAL_PLACES,
};

#[test]
fn numeric_tables() {
    let cases = numeric_cases();
    for (s, expected) in cases.unsigned_integer {
        assert_eq!(is_non_zero_unsigned_integer(s).unwrap(), expected, "integer {:?}", s);
    }
    for (s, expected) in cases.double {
        assert_eq!(is_double(s).unwrap(), expected, "double {:?}", s);
    }
    for (s, expected) in cases.over_two_places {
        assert_eq!(has_more_than_two_decimal_places(s).unwrap(), expected, "places {:?}", s);
    }
}

#[test]
fn integer_range_boundary() {
    assert_eq!(parse_non_zero_unsigned_integer("2147483647"), Ok(2_147_483_647));
    assert_eq!(parse_non_zero_unsigned_integer("2147483648"), Err(NumberFormatError::Overflow));
    assert_eq!(parse_non_zero_unsigned_integer("0000000001"), Ok(1));
}

#[test]
fn double_values_round_trip_through_std() {
    assert_eq!(parse_double("6.022e23"), Ok(6.022e23));
    assert_eq!(parse_double(".5"), Ok(0.5));
    assert!(parse_double("1e999").unwrap().is_infinite());
}

#[test]
fn score_field_validation() {
    // A score is valid when it is a decimal with at most two places.
    let valid = |s: &str| is_double(s).unwrap() && !has_more_than_two_decimal_places(s).unwrap();
    assert!(valid("100"));
    assert!(valid("89.67"));
    assert!(valid("100."));
    assert!(!valid("100.001"));
    assert!(!valid("1.ab"));
    assert!(!valid("abc"));
}

#[test]
fn decimal_place_limit_is_two() {
    assert_eq!(MAX_DECIMAL_PLACES, 2);
    assert_eq!(decimal_places("3.14159"), Some(5));
    assert_eq!(decimal_places("314"), None);
}

#[test]
fn missing_values() {
    assert_missing(is_non_zero_unsigned_integer(None), "value");
    assert_missing(is_double(None), "value");
    assert_missing(has_more_than_two_decimal_places(None), "value");
}
