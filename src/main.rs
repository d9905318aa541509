//! Check pairs of numbers for approximate equality within the solver's tolerance.
//!
//! Run:
//! ```bash
//! $ approx-check -h
//! ```
//! to see the available options.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use approx_check::compare::{compare_all, Summary};
use approx_check::config::Config;
use approx_check::pairs::{read_pairs, Pair};
use approx_check::report;
use common::Tolerance;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files with one pair of numbers per line (`-` for stdin)
    files: Vec<PathBuf>,
    /// Config file (default: ./approx.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the tolerance
    #[arg(short, long)]
    tolerance: Option<Tolerance>,
    /// Compare a pair given inline
    #[arg(short, long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    pair: Vec<f64>,
    /// Print a JSON report instead
    #[arg(long)]
    json: bool,
    /// Disable colors
    #[arg(long)]
    no_color: bool,
    /// Exit with status 1 if some pair is not approximately equal
    #[arg(long)]
    fail_on_mismatch: bool,
    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    report::set_verbose(args.verbose);
    if args.no_color || !io::stdout().is_terminal() {
        report::disable_colors();
    }

    match run(&args) {
        Ok(summary) if args.fail_on_mismatch && !summary.all_equal() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report::error(&e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<Summary> {
    let config = Config::read(args.config.as_deref())?;
    if !config.color {
        report::disable_colors();
    }
    let tolerance = args.tolerance.unwrap_or(config.tolerance);
    report::info(format_args!("tolerance {tolerance}"));

    let mut pairs: Vec<Pair> = args
        .pair
        .chunks_exact(2)
        .map(|ab| Pair::new(ab[0], ab[1]))
        .collect();

    if args.files.is_empty() && pairs.is_empty() {
        report::info("reading pairs from stdin");
        pairs = read_pairs(Path::new("-"))?;
    }
    for file in &args.files {
        let read = read_pairs(file)?;
        report::info(format_args!("{}: {} pairs", file.display(), read.len()));
        pairs.extend(read);
    }
    if pairs.is_empty() {
        report::warn("no pairs to compare");
    }

    let comparisons = compare_all(&pairs, tolerance);
    let summary = Summary::new(&comparisons);

    let stdout = io::stdout().lock();
    if args.json {
        report::write_json(stdout, &comparisons, summary, tolerance)?;
        println!();
    } else {
        report::write_human(stdout, &comparisons, summary, tolerance)?;
    }

    Ok(summary)
}
