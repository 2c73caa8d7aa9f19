// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered multi-token matching with prefix tolerance on the last token.
//!
//! The sentence is cut into tokens and a window of `n` tokens (one per query
//! token) slides across it. Each window is rendered as `"t1 t2 ... tn "`, every
//! token followed by one space, and compared against the query rendered as
//! `"q1 q2 ... qn"`. A window matches when it *starts with* the query string.
//!
//! Because the window always ends in a space and the query does not, interior
//! tokens must match whole words (the space after `qi` has to line up with the
//! space after `ti`), while the final query token only has to be a prefix of
//! the final window token:
//!
//! ```text
//! sentence  "abc def"        query "de"      window "def "     -> match
//! sentence  "abc def"        query "abc de"  window "abc def " -> match
//! sentence  "abc def"        query "bc def"  window "abc def " -> no match
//! ```

use tracing::{debug, trace};

use crate::contracts::{check_match_offset, check_normalized, check_window_range};
use crate::error::ArgumentResult;
use crate::utils::{normalize, require, require_query};

/// Does `sentence` contain the tokens of `query`, in order and adjacent?
///
/// Case is ignored. The last query token may be a truncation of the sentence
/// token it lines up with; every other token must match whole.
///
/// ```
/// use fieldsift::contains_ordered_substring;
///
/// assert!(contains_ordered_substring("ABc def", "abc").unwrap());
/// assert!(contains_ordered_substring("ABc def", "DEF").unwrap());
/// assert!(contains_ordered_substring("ABc def", "AB").unwrap());
/// assert!(contains_ordered_substring("ABc def", "de").unwrap());
/// assert!(!contains_ordered_substring("ABc def", "bc def").unwrap());
/// ```
pub fn contains_ordered_substring<'a>(
    sentence: impl Into<Option<&'a str>>,
    query: impl Into<Option<&'a str>>,
) -> ArgumentResult<bool> {
    find_ordered_substring(sentence, query).map(|offset| offset.is_some())
}

/// Token offset of the first window of `sentence` that matches `query`.
///
/// Same matching rule as [`contains_ordered_substring`]. Windows are scanned
/// left to right and the first hit wins. Returns `Ok(None)` when the query has
/// more tokens than the sentence.
pub fn find_ordered_substring<'a>(
    sentence: impl Into<Option<&'a str>>,
    query: impl Into<Option<&'a str>>,
) -> ArgumentResult<Option<usize>> {
    let sentence = normalize(require(sentence.into(), "sentence")?);
    let query = require_query(query.into(), "query")?;
    check_normalized(&sentence);
    check_normalized(&query);

    let sentence_tokens = sentence_tokens(&sentence);
    let query_tokens: Vec<&str> = query.split_whitespace().collect();
    let query_joined = query_tokens.join(" ");

    let found = first_window_match(&sentence_tokens, query_tokens.len(), &query_joined);
    match found {
        Some(offset) => debug!(%sentence, %query, offset, "ordered window matched"),
        None => trace!(%sentence, %query, "no ordered window matched"),
    }
    Ok(found)
}

/// Split a normalized sentence on single spaces.
///
/// Runs of spaces produce empty tokens, which take up a window slot like any
/// other token. Residual whitespace inside a token (tabs, newlines) is trimmed.
fn sentence_tokens(sentence: &str) -> Vec<&str> {
    sentence.split(' ').map(str::trim).collect()
}

/// Render a window: every token followed by exactly one space.
fn render_window(window: &[&str]) -> String {
    let mut rendered = String::with_capacity(window.iter().map(|t| t.len() + 1).sum());
    for token in window {
        rendered.push_str(token);
        rendered.push(' ');
    }
    rendered
}

fn first_window_match(tokens: &[&str], width: usize, query_joined: &str) -> Option<usize> {
    debug_assert!(width > 0, "query must have at least one token");
    if width > tokens.len() {
        return None;
    }
    check_window_range(tokens.len(), width);

    let offset = tokens
        .windows(width)
        .position(|window| render_window(window).starts_with(query_joined))?;

    check_match_offset(tokens, width, offset, query_joined);
    Some(offset)
}
