//! Useful constants to have

/// Absolute tolerance of [`approx`](crate::approx_eq::approx) and
/// [`near_zero`](crate::approx_eq::near_zero).
///
/// Every zero-test and equality check in the solver goes through this value.
pub const EPSILON: f64 = 1.0e-8;

/// Unicode's almost-equal-to symbol
pub const APPROX_SYM: char = '\u{2248}';

/// Unicode's not-almost-equal-to symbol
pub const NOT_APPROX_SYM: char = '\u{2249}';

/// Unicode's delta symbol
pub const DELTA_SYM: char = '\u{0394}';

/// Unicode's epsilon symbol
pub const EPSILON_SYM: char = '\u{03b5}';
