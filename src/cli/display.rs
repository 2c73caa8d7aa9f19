// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for verdicts.
//!
//! Green check for true, red cross for false. Respects `NO_COLOR` and drops
//! escapes when stdout is not a TTY, so piped output stays clean.

use serde::Serialize;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
}

use colors::*;

/// Check if we should use colors
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color codes if colors are enabled
pub fn styled(styles: &[&str], text: &str, colored: bool) -> String {
    if colored {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Machine-readable verdict printed with `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub command: &'a str,
    pub verdict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// One-line human verdict, e.g. `✓ match  (offset 2)`.
pub fn verdict_line(report: &Report<'_>, colored: bool) -> String {
    let mut line = if report.verdict {
        styled(&[BOLD, GREEN], "✓ true", colored)
    } else {
        styled(&[BOLD, RED], "✗ false", colored)
    };
    if let Some(offset) = report.offset {
        line.push_str(&styled(&[DIM], &format!("  (offset {})", offset), colored));
    }
    line
}
