//! Numeric primitives shared by the solver and the `approx-check` tool.

pub mod approx_eq;
pub mod constants;
pub mod tolerance;
pub mod utils;

pub use approx_eq::{approx, approx_by, near_zero, near_zero_by, ApproxEq};
pub use tolerance::{InvalidTolerance, Tolerance};
