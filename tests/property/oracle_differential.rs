// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential testing: compare the library against the oracles.
//!
//! If they disagree, read both. The oracle is written to be easy to check by
//! eye, so it is usually right.

use super::oracles::{oracle_contains, oracle_ordered, oracle_over_two_places, oracle_unsigned};
use fieldsift::{
    contains_ignore_case, find_ordered_substring, has_more_than_two_decimal_places,
    is_non_zero_unsigned_integer,
};
use proptest::prelude::*;

/// Small alphabet so that matches actually happen.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB \t]{0,16}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB ]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Containment matches the oracle for every non-blank query.
    #[test]
    fn diff_contains(sentence in text_strategy(), query in query_strategy()) {
        prop_assume!(!query.trim().is_empty());
        prop_assert_eq!(
            contains_ignore_case(sentence.as_str(), query.as_str()).unwrap(),
            oracle_contains(&sentence, &query)
        );
    }

    /// Ordered matching reports the same first offset as the token-wise oracle.
    #[test]
    fn diff_ordered(sentence in text_strategy(), query in query_strategy()) {
        prop_assume!(!query.trim().is_empty());
        prop_assert_eq!(
            find_ordered_substring(sentence.as_str(), query.as_str()).unwrap(),
            oracle_ordered(&sentence, &query),
            "sentence={:?} query={:?}",
            sentence,
            query
        );
    }

    /// Unsigned-integer validation matches the oracle.
    #[test]
    fn diff_unsigned(s in "[+-]?[0-9a ]{0,12}") {
        prop_assert_eq!(
            is_non_zero_unsigned_integer(s.as_str()).unwrap(),
            oracle_unsigned(&s),
            "input={:?}",
            s
        );
    }

    /// Decimal-place counting matches the oracle, including non-digit suffixes.
    #[test]
    fn diff_decimal_places(s in "[0-9a.é]{0,8}") {
        prop_assert_eq!(
            has_more_than_two_decimal_places(s.as_str()).unwrap(),
            oracle_over_two_places(&s)
        );
    }
}
