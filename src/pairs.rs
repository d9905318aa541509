//! Plain-text input: one pair of numbers per line
//!
//! ```text
//! # comments and blank lines are skipped
//! 1.0       1.000000001
//! -3        -3
//! NaN       0
//! inf       inf
//! ```

use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};

/// Two numbers to compare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub a: f64,
    pub b: f64,
}

impl Pair {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Parse a line of two whitespace separated numbers
    pub fn from_text(text: &str) -> Result<Self> {
        let mut fields = text.split_whitespace();
        let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
            bail!("expected two numbers, got '{}'", text.trim());
        };
        ensure!(
            fields.next().is_none(),
            "expected two numbers, got '{}'",
            text.trim()
        );
        Ok(Self {
            a: parse_num(a)?,
            b: parse_num(b)?,
        })
    }
}

fn parse_num(s: &str) -> Result<f64> {
    s.parse().with_context(|| format!("'{s}' is not a number"))
}

/// Parse every pair in `text`, skipping blank lines and `#` comments
pub fn parse_pairs(text: &str) -> Result<Vec<Pair>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim_start();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| Pair::from_text(line).with_context(|| format!("line {}", i + 1)))
        .collect()
}

/// Read pairs from a file, or from stdin if `path` is `-`
pub fn read_pairs(path: &Path) -> Result<Vec<Pair>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("could not read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("could not open {}", path.display()))?
    };
    parse_pairs(&text).with_context(|| format!("could not parse {}", path.display()))
}
