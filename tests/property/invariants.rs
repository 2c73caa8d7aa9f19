// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariants that must hold for any input.

use fieldsift::{
    contains_ignore_case, contains_ordered_substring, is_double, normalize, parse_double,
    ArgumentError,
};
use proptest::prelude::*;

proptest! {
    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized text has no surrounding whitespace and no uppercase ASCII.
    #[test]
    fn normalize_output_shape(s in "[ a-zA-Z\t]{0,24}") {
        let n = normalize(&s);
        prop_assert_eq!(n.trim(), n.as_str());
        prop_assert!(!n.bytes().any(|b| b.is_ascii_uppercase()));
    }

    /// Blank queries are always argument errors, never `false`.
    #[test]
    fn blank_queries_are_errors(sentence in "\\PC{0,16}", blank in "[ \t\n]{0,4}") {
        prop_assert_eq!(
            contains_ignore_case(sentence.as_str(), blank.as_str()),
            Err(ArgumentError::EmptyQuery { name: "query" })
        );
        prop_assert_eq!(
            contains_ordered_substring(sentence.as_str(), blank.as_str()),
            Err(ArgumentError::EmptyQuery { name: "query" })
        );
    }

    /// A query with more tokens than the sentence never matches.
    #[test]
    fn longer_queries_never_match(words in prop::collection::vec("[a-z]{1,4}", 1..4), extra in "[a-z]{1,4}") {
        let sentence = words.join(" ");
        let mut query_words = words.clone();
        query_words.push(extra);
        let query = query_words.join(" ");
        prop_assert!(!contains_ordered_substring(sentence.as_str(), query.as_str()).unwrap());
    }

    /// Arbitrary input never panics the decimal parser, and acceptance agrees with std.
    #[test]
    fn accepted_doubles_parse_in_std(s in "[-+0-9.eE]{0,10}") {
        if is_double(s.as_str()).unwrap() {
            prop_assert!(s.parse::<f64>().is_ok());
            prop_assert!(parse_double(&s).is_ok());
        }
    }
}
