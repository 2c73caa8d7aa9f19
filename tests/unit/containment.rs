// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Containment and equality through the public API.

use super::common::{assert_empty_query, assert_missing, containment_cases, SAMPLE_NAMES};
use fieldsift::{contains_ignore_case, matches_ignore_case};

#[test]
fn containment_table() {
    for (sentence, query, expected) in containment_cases() {
        assert_eq!(
            contains_ignore_case(sentence, query).unwrap(),
            expected,
            "contains({:?}, {:?})",
            sentence,
            query
        );
    }
}

#[test]
fn partial_names_are_found() {
    let hits: Vec<&str> = SAMPLE_NAMES
        .iter()
        .copied()
        .filter(|name| contains_ignore_case(*name, "li").unwrap())
        .collect();
    assert_eq!(hits, vec!["Charlotte Oliveiro", "David Li"]);
}

#[test]
fn unicode_case_folding() {
    assert!(contains_ignore_case("NGUYỄN Thị", "nguyễn").unwrap());
    assert!(contains_ignore_case("STRASSE", "strasse").unwrap());
    assert!(contains_ignore_case("ΟΔΥΣΣΕΥΣ", "οδυσσ").unwrap());
}

#[test]
fn no_locale_specific_folding() {
    // Simple lower-casing only: ß is not expanded to ss.
    assert!(!contains_ignore_case("Straße", "strasse").unwrap());
}

#[test]
fn argument_errors() {
    assert_missing(contains_ignore_case(None, "x"), "sentence");
    assert_missing(contains_ignore_case("x", None), "query");
    assert_empty_query(contains_ignore_case("x", ""), "query");
    assert_missing(matches_ignore_case(None, "x"), "a");
    assert_missing(matches_ignore_case("x", None), "b");
    assert_empty_query(matches_ignore_case("x", "\n\t "), "b");
}

#[test]
fn equality_ignores_case_and_padding() {
    assert!(matches_ignore_case(" Roy Balakrishnan ", "roy balakrishnan").unwrap());
    assert!(!matches_ignore_case("Roy Balakrishnan", "roy").unwrap());
}
