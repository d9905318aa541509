//! Classify pairs

use rayon::prelude::*;
use serde::Serialize;

use common::Tolerance;

use crate::pairs::Pair;

/// The verdict for one pair
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub a: f64,
    pub b: f64,
    /// Larger minus smaller, NaN if the comparison saw a NaN
    pub diff: f64,
    pub equal: bool,
}

impl Comparison {
    pub fn new(pair: Pair, tolerance: Tolerance) -> Self {
        let Pair { a, b } = pair;
        let diff = if a > b { a - b } else { b - a };
        Self {
            a,
            b,
            diff,
            equal: tolerance.approx(a, b),
        }
    }
}

/// Compare every pair, keeping the input order
pub fn compare_all(pairs: &[Pair], tolerance: Tolerance) -> Vec<Comparison> {
    pairs
        .par_iter()
        .map(|&pair| Comparison::new(pair, tolerance))
        .collect()
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub equal: usize,
    pub unequal: usize,
}

impl Summary {
    pub fn new(comparisons: &[Comparison]) -> Self {
        let equal = comparisons.iter().filter(|c| c.equal).count();
        Self {
            total: comparisons.len(),
            equal,
            unequal: comparisons.len() - equal,
        }
    }

    pub fn all_equal(&self) -> bool {
        self.unequal == 0
    }
}
