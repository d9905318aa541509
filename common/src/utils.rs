use std::fmt;

use crate::constants::{DELTA_SYM, EPSILON_SYM};
use crate::tolerance::Tolerance;

/// Displays a difference together with its size relative to the tolerance, e.g. `Δ=9.000e-9 (0.90ε)`
#[derive(Debug, Clone, Copy)]
pub struct DisplayDiff {
    diff: f64,
    tolerance: Tolerance,
}

impl DisplayDiff {
    pub fn new(diff: f64, tolerance: Tolerance) -> Self {
        Self { diff, tolerance }
    }
}

impl fmt::Display for DisplayDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.diff.is_finite() {
            return write!(f, "{DELTA_SYM}={}", self.diff);
        }
        let rel = self.diff / self.tolerance.get();
        write!(f, "{DELTA_SYM}={:.3e} ({rel:.2}{EPSILON_SYM})", self.diff)
    }
}
