// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text matchers.
//!
//! Throws arbitrary sentence/query pairs at containment and ordered matching.
//! Neither may panic, blank queries must be rejected, and a single-word ordered
//! match must also be a containment match.

#![no_main]

use arbitrary::Arbitrary;
use fieldsift::{
    contains_ignore_case, contains_ordered_substring, find_ordered_substring, ArgumentError,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for the matchers
#[derive(Debug, Arbitrary)]
struct MatchInput {
    /// Text being searched
    sentence_bytes: Vec<u8>,
    /// Search phrase
    query_bytes: Vec<u8>,
}

/// Lossy UTF-8, capped in characters so slicing never splits a code point.
fn to_text(bytes: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(max_chars).collect()
}

fuzz_target!(|input: MatchInput| {
    let sentence = to_text(&input.sentence_bytes, 200);
    let query = to_text(&input.query_bytes, 50);

    let contains = contains_ignore_case(sentence.as_str(), query.as_str());
    let ordered = find_ordered_substring(sentence.as_str(), query.as_str());

    // INVARIANT 1: blank queries are argument errors for both matchers
    if query.to_lowercase().trim().is_empty() {
        assert_eq!(contains, Err(ArgumentError::EmptyQuery { name: "query" }));
        assert_eq!(ordered, Err(ArgumentError::EmptyQuery { name: "query" }));
        return;
    }

    // INVARIANT 2: present, non-blank arguments never error
    let contains = contains.expect("non-blank query must be accepted");
    let ordered = ordered.expect("non-blank query must be accepted");

    // INVARIANT 3: the boolean form agrees with the offset form
    assert_eq!(
        contains_ordered_substring(sentence.as_str(), query.as_str()),
        Ok(ordered.is_some())
    );

    // INVARIANT 4: a reported offset leaves room for every query token
    if let Some(offset) = ordered {
        let sentence_tokens = sentence.to_lowercase().trim().split(' ').count();
        let query_tokens = query.split_whitespace().count();
        assert!(offset + query_tokens <= sentence_tokens);

        // INVARIANT 5: a single-token ordered match is also a containment match
        if query_tokens == 1 {
            assert!(contains, "ordered match without containment: {:?} / {:?}", sentence, query);
        }
    }
});
