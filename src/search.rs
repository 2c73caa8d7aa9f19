// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive containment and equality.
//!
//! Both operands go through [`normalize`] first. Neither function looks at word
//! boundaries: `"bc def"` is contained in `"ABc def"`. For word-aligned matching
//! see [`crate::contains_ordered_substring`].

use tracing::trace;

use crate::error::ArgumentResult;
use crate::utils::{normalize, require, require_query};

/// Does `sentence` contain `query` anywhere, ignoring case?
///
/// ```
/// use fieldsift::contains_ignore_case;
///
/// assert!(contains_ignore_case("abcd", "abc").unwrap());
/// assert!(contains_ignore_case("ABc def", "bc def").unwrap());
/// assert!(!contains_ignore_case("ABc def", "xyz").unwrap());
/// ```
///
/// Fails with [`ArgumentError::Missing`](crate::ArgumentError::Missing) if
/// either input is absent, and with
/// [`ArgumentError::EmptyQuery`](crate::ArgumentError::EmptyQuery) if `query`
/// is blank.
pub fn contains_ignore_case<'a>(
    sentence: impl Into<Option<&'a str>>,
    query: impl Into<Option<&'a str>>,
) -> ArgumentResult<bool> {
    let sentence = normalize(require(sentence.into(), "sentence")?);
    let query = require_query(query.into(), "query")?;

    let found = sentence.contains(query.as_str());
    trace!(%sentence, %query, found, "contains_ignore_case");
    Ok(found)
}

/// Is `a` the same text as `b`, ignoring case and surrounding whitespace?
///
/// A full match is required: `"abcd"` does not match `"abc"`.
///
/// ```
/// use fieldsift::matches_ignore_case;
///
/// assert!(matches_ignore_case("ABc def", "abc def ").unwrap());
/// assert!(!matches_ignore_case("abcd", "abc").unwrap());
/// ```
pub fn matches_ignore_case<'a>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'a str>>,
) -> ArgumentResult<bool> {
    let a = normalize(require(a.into(), "a")?);
    let b = require_query(b.into(), "b")?;

    let equal = a == b;
    trace!(%a, %b, equal, "matches_ignore_case");
    Ok(equal)
}
