//! Printing results and diagnostics

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use serde::Serialize;
use yansi::Paint;

use common::constants::{APPROX_SYM, NOT_APPROX_SYM};
use common::utils::DisplayDiff;
use common::Tolerance;

use crate::compare::{Comparison, Summary};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Turn colors off for both the report and diagnostics
pub fn disable_colors() {
    Paint::disable();
}

/// Print a diagnostic to stderr, only in verbose mode
pub fn info(msg: impl std::fmt::Display) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{} {msg}", Paint::cyan("info:"));
    }
}

pub fn warn(msg: impl std::fmt::Display) {
    eprintln!("{} {msg}", Paint::yellow("warning:").bold());
}

/// Print an error with its whole context chain
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", Paint::red("error:").bold());
}

/// One line per comparison followed by a summary
pub fn write_human<W: Write>(
    mut w: W,
    comparisons: &[Comparison],
    summary: Summary,
    tolerance: Tolerance,
) -> io::Result<()> {
    for c in comparisons {
        let verdict = if c.equal {
            Paint::green(APPROX_SYM)
        } else {
            Paint::red(NOT_APPROX_SYM).bold()
        };
        writeln!(
            w,
            "{} {verdict} {}  {}",
            c.a,
            c.b,
            Paint::new(DisplayDiff::new(c.diff, tolerance)).dimmed()
        )?;
    }

    let unequal = if summary.unequal == 0 {
        Paint::green(summary.unequal)
    } else {
        Paint::red(summary.unequal)
    };
    writeln!(
        w,
        "{} pairs, {} equal, {unequal} not equal (tolerance {tolerance})",
        summary.total, summary.equal
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tolerance: Tolerance,
    comparisons: &'a [Comparison],
    summary: Summary,
}

/// Machine-readable report. Non-finite numbers become `null`.
pub fn write_json<W: Write>(
    w: W,
    comparisons: &[Comparison],
    summary: Summary,
    tolerance: Tolerance,
) -> Result<()> {
    let report = JsonReport {
        tolerance,
        comparisons,
        summary,
    };
    serde_json::to_writer_pretty(w, &report).context("could not serialize report")
}
