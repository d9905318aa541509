//! Compare floats with a fixed absolute tolerance
//!
//! The difference is always taken as "larger minus smaller" by branching on `a > b`, never through
//! `abs()`. With that formulation a NaN operand, or two infinities of the same sign, produce a NaN
//! difference and the comparison fails. Keep the branch.

pub use crate::constants::EPSILON;

/// Whether `a` and `b` differ by strictly less than [`EPSILON`].
///
/// ```
/// use common::approx_eq::approx;
///
/// assert!(approx(0.0, 9.0e-9));
/// assert!(!approx(0.0, 1.0e-8));
/// assert!(!approx(f64::INFINITY, f64::INFINITY));
/// ```
#[inline]
pub fn approx(a: f64, b: f64) -> bool {
    approx_by(a, b, EPSILON)
}

/// Same as [`approx`] but with an explicit tolerance.
#[inline]
pub fn approx_by(a: f64, b: f64, eps: f64) -> bool {
    if a > b {
        a - b < eps
    } else {
        b - a < eps
    }
}

/// Whether `value` is within [`EPSILON`] of zero.
///
/// Agrees with `approx(value, 0.0)` for every input.
#[inline]
pub fn near_zero(value: f64) -> bool {
    near_zero_by(value, EPSILON)
}

/// Same as [`near_zero`] but with an explicit tolerance.
#[inline]
pub fn near_zero_by(value: f64, eps: f64) -> bool {
    if value < 0.0 {
        -value < eps
    } else {
        value < eps
    }
}

pub trait ApproxEq: Sized {
    /// Compare two objects with the default tolerance
    fn approx_eq(self, rhs: Self) -> bool {
        self.approx_eq_by(rhs, EPSILON)
    }

    /// Compare two objects with a given tolerance
    fn approx_eq_by(self, rhs: Self, eps: f64) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq_by(self, rhs: f64, eps: f64) -> bool {
        approx_by(self, rhs, eps)
    }
}

/// Element-wise. Slices of different length are never equal.
impl ApproxEq for &[f64] {
    fn approx_eq_by(self, rhs: Self, eps: f64) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs).all(|(&a, &b)| approx_by(a, b, eps))
    }
}
