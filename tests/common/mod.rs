// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use fieldsift::ArgumentError;

// Re-export canonical fixture tables from fieldsift::testing
pub use fieldsift::testing::{containment_cases, numeric_cases, ordered_cases, SAMPLE_NAMES};

/// Records whose name field matches `query` with the ordered token matcher.
pub fn search_names<'a>(names: &[&'a str], query: &str) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| {
            fieldsift::contains_ordered_substring(*name, query).expect("query must be valid")
        })
        .collect()
}

/// Assert that an argument-checked call failed because `name` was absent.
pub fn assert_missing<T: std::fmt::Debug>(result: Result<T, ArgumentError>, name: &str) {
    match result {
        Err(ArgumentError::Missing { name: got }) => assert_eq!(got, name),
        other => panic!("expected Missing {{ name: {:?} }}, got {:?}", name, other),
    }
}

/// Assert that an argument-checked call failed because `name` was blank.
pub fn assert_empty_query<T: std::fmt::Debug>(result: Result<T, ArgumentError>, name: &str) {
    match result {
        Err(ArgumentError::EmptyQuery { name: got }) => assert_eq!(got, name),
        other => panic!("expected EmptyQuery {{ name: {:?} }}, got {:?}", name, other),
    }
}
