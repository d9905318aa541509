//! Validated tolerance value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::approx_eq::{approx_by, near_zero_by};
use crate::constants::EPSILON;

/// A finite, strictly positive absolute tolerance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(eps: f64) -> Result<Self, InvalidTolerance> {
        if eps.is_finite() && eps > 0.0 {
            Ok(Self(eps))
        } else {
            Err(InvalidTolerance(eps))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn approx(self, a: f64, b: f64) -> bool {
        approx_by(a, b, self.0)
    }

    #[inline]
    pub fn near_zero(self, value: f64) -> bool {
        near_zero_by(value, self.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(EPSILON)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = InvalidTolerance;

    fn try_from(eps: f64) -> Result<Self, Self::Error> {
        Self::new(eps)
    }
}

impl From<Tolerance> for f64 {
    fn from(t: Tolerance) -> Self {
        t.0
    }
}

impl FromStr for Tolerance {
    type Err = ParseToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let eps: f64 = s
            .trim()
            .parse()
            .map_err(|_| ParseToleranceError::NotANumber(s.to_owned()))?;
        Ok(Self::new(eps)?)
    }
}

/// The value can't be used as a tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidTolerance(pub f64);

impl fmt::Display for InvalidTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tolerance must be a finite positive number, got {}",
            self.0
        )
    }
}

impl std::error::Error for InvalidTolerance {}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseToleranceError {
    NotANumber(String),
    Invalid(InvalidTolerance),
}

impl From<InvalidTolerance> for ParseToleranceError {
    fn from(e: InvalidTolerance) -> Self {
        Self::Invalid(e)
    }
}

impl fmt::Display for ParseToleranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "'{s}' is not a number"),
            Self::Invalid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseToleranceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotANumber(_) => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_epsilon() {
        assert_eq!(Tolerance::default().get(), EPSILON);
        assert_eq!(Tolerance::default().get(), 1.0e-8);
    }

    #[test]
    fn rejects_unusable_values() {
        for eps in [0.0, -0.0, -1.0e-8, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Tolerance::new(eps).is_err(), "{eps} accepted");
        }
        assert_eq!(Tolerance::new(0.5).unwrap().get(), 0.5);
        assert!(Tolerance::new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn delegates_to_explicit_comparisons() {
        let t = Tolerance::new(0.5).unwrap();
        assert!(t.approx(1.0, 1.25));
        assert!(!t.approx(1.0, 1.5));
        assert!(!t.approx(f64::NAN, f64::NAN));
        assert!(t.near_zero(-0.25));
        assert!(!t.near_zero(0.5));
    }

    #[test]
    fn parse() {
        assert_eq!("1e-6".parse::<Tolerance>().unwrap().get(), 1.0e-6);
        assert_eq!(" 0.25 ".parse::<Tolerance>().unwrap().get(), 0.25);
        assert_eq!(
            "abc".parse::<Tolerance>(),
            Err(ParseToleranceError::NotANumber("abc".into()))
        );
        assert_eq!(
            "-1".parse::<Tolerance>(),
            Err(ParseToleranceError::Invalid(InvalidTolerance(-1.0)))
        );
        assert!("inf".parse::<Tolerance>().is_err());
    }

    #[test]
    fn serde_bare_float() {
        let t: Tolerance = serde_json::from_str("0.001").unwrap();
        assert_eq!(t.get(), 0.001);
        assert_eq!(serde_json::to_string(&t).unwrap(), "0.001");

        let err = serde_json::from_str::<Tolerance>("-2.0").unwrap_err();
        assert!(err.to_string().contains("finite positive"));
    }
}
