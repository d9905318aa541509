//! Check pairs of numbers for approximate equality the same way the constraint solver does.
//!
//! The comparison itself lives in [`common::approx_eq`]. This crate wraps it with a config file,
//! a plain-text input format and a report, so rounding problems in solver output can be inspected
//! from the command line.

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub use common;

pub mod compare;
pub mod config;
pub mod pairs;
pub mod report;
