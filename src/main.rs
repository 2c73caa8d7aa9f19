// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fieldsift::{
    contains_ignore_case, describe, find_ordered_substring, has_more_than_two_decimal_places,
    is_double, is_non_zero_unsigned_integer, matches_ignore_case,
};

mod cli;
use cli::display::{use_colors, verdict_line, Report};
use cli::{Cli, Commands};

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = run(&cli.command).and_then(|report| {
        println!("{}", render_report(&report, cli.json, use_colors())?);
        Ok(report)
    });

    if let Err(err) = &outcome {
        error!(command = cli.command.name(), "command failed");
        eprintln!("{}", error_text(err));
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 for a true verdict, 1 for false, 2 when the command failed.
fn exit_status(outcome: &Result<Report<'_>>) -> u8 {
    match outcome {
        Ok(report) if report.verdict => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn error_text(err: &anyhow::Error) -> String {
    describe(err).unwrap_or_else(|e| e.to_string())
}

/// Log to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Commands) -> Result<Report<'static>> {
    let name = command.name();
    debug!(command = name, "running");

    let mut offset = None;
    let verdict = match command {
        Commands::Contains { sentence, query } => {
            contains_ignore_case(sentence.as_str(), query.as_str())
        }
        Commands::Ordered {
            sentence,
            query,
            offset: want_offset,
        } => find_ordered_substring(sentence.as_str(), query.as_str()).map(|found| {
            if *want_offset {
                offset = found;
            }
            found.is_some()
        }),
        Commands::Matches { a, b } => matches_ignore_case(a.as_str(), b.as_str()),
        Commands::Integer { value } => is_non_zero_unsigned_integer(value.as_str()),
        Commands::Double { value } => is_double(value.as_str()),
        Commands::Decimals { value } => has_more_than_two_decimal_places(value.as_str()),
    }
    .with_context(|| format!("`{}` rejected its arguments", name))?;

    Ok(Report {
        command: name,
        verdict,
        offset,
    })
}

fn render_report(report: &Report<'_>, json: bool, colored: bool) -> Result<String> {
    if json {
        serde_json::to_string(report).context("serializing report")
    } else {
        Ok(verdict_line(report, colored))
    }
}
