// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldsift command-line interface.
//!
//! One subcommand per predicate. Each prints a verdict and sets the exit code:
//! 0 for true, 1 for false, 2 when the arguments themselves are rejected
//! (blank query). `--json` switches the output to a single JSON object for
//! scripting.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fieldsift",
    about = "Case-insensitive text matching and numeric field validation",
    version
)]
pub struct Cli {
    /// Emit a JSON object instead of a human-readable verdict
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Does SENTENCE contain QUERY anywhere (case-insensitive substring)?
    Contains {
        /// Text being searched
        #[arg(allow_hyphen_values = true)]
        sentence: String,
        /// Search phrase, must not be blank
        #[arg(allow_hyphen_values = true)]
        query: String,
    },

    /// Does SENTENCE contain the words of QUERY in order?
    ///
    /// The last word of QUERY may be a prefix of the matching word,
    /// so "alex ye" finds "Alex Yeoh".
    Ordered {
        /// Text being searched
        #[arg(allow_hyphen_values = true)]
        sentence: String,
        /// Search phrase, must not be blank
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Also print the word offset of the first match
        #[arg(long)]
        offset: bool,
    },

    /// Is A the same text as B, ignoring case and surrounding whitespace?
    Matches {
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Must not be blank
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Is VALUE a non-zero unsigned integer (digits only, no sign)?
    Integer {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Is VALUE a finite decimal number?
    Double {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Does VALUE have more than two characters after its decimal point?
    Decimals {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

impl Commands {
    /// Subcommand name, as used in JSON output and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Contains { .. } => "contains",
            Commands::Ordered { .. } => "ordered",
            Commands::Matches { .. } => "matches",
            Commands::Integer { .. } => "integer",
            Commands::Double { .. } => "double",
            Commands::Decimals { .. } => "decimals",
        }
    }
}
