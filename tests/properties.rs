use proptest::prelude::*;

use approx_check::common::approx_eq::*;
use approx_check::common::Tolerance;
use approx_check::compare::compare_all;
use approx_check::pairs::{parse_pairs, Pair};

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn reflexive_for_finite(x in finite()) {
        prop_assert!(approx(x, x));
    }

    #[test]
    fn symmetric_for_finite(a in finite(), b in finite()) {
        prop_assert_eq!(approx(a, b), approx(b, a));
    }

    #[test]
    fn symmetric_near_each_other(a in -1.0e6..1.0e6f64, d in -2.0e-8..2.0e-8f64) {
        let b = a + d;
        prop_assert_eq!(approx(a, b), approx(b, a));
    }

    #[test]
    fn same_as_absolute_difference_for_finite(a in finite(), b in finite()) {
        prop_assert_eq!(approx(a, b), (a - b).abs() < EPSILON);
    }

    #[test]
    fn default_tolerance_is_epsilon(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(approx(a, b), approx_by(a, b, EPSILON));
        prop_assert_eq!(approx(a, b), Tolerance::default().approx(a, b));
        prop_assert_eq!(approx(a, b), a.approx_eq(b));
    }

    #[test]
    fn deterministic(a in any::<f64>(), b in any::<f64>()) {
        let first = approx(a, b);
        for _ in 0..8 {
            prop_assert_eq!(approx(a, b), first);
        }
    }

    #[test]
    fn nan_is_never_equal(x in any::<f64>()) {
        prop_assert!(!approx(f64::NAN, x));
        prop_assert!(!approx(x, f64::NAN));
    }

    #[test]
    fn infinity_is_never_equal(x in any::<f64>()) {
        prop_assert!(!approx(f64::INFINITY, x));
        prop_assert!(!approx(x, f64::NEG_INFINITY));
    }

    #[test]
    fn zero_test_is_comparison_with_zero(v in any::<f64>()) {
        prop_assert_eq!(near_zero(v), approx(v, 0.0));
        prop_assert_eq!(near_zero(v), approx(0.0, v));
    }

    #[test]
    fn batch_agrees_with_sequential(raw in prop::collection::vec((any::<f64>(), any::<f64>()), 0..200)) {
        let pairs: Vec<_> = raw.iter().map(|&(a, b)| Pair::new(a, b)).collect();
        let comparisons = compare_all(&pairs, Tolerance::default());
        prop_assert_eq!(comparisons.len(), pairs.len());
        for (p, c) in pairs.iter().zip(&comparisons) {
            prop_assert_eq!(c.equal, approx(p.a, p.b));
        }
    }

    #[test]
    fn text_round_trip(a in finite(), b in finite()) {
        let pairs = parse_pairs(&format!("{a} {b}\n")).unwrap();
        prop_assert_eq!(pairs, vec![Pair::new(a, b)]);
    }
}

#[test]
fn scenarios() {
    assert!(approx(1.0, 1.000000001));
    assert!(approx(-3.0, -3.0));
    assert!(approx(0.0, -0.0));
    assert!(!approx(1.0, 1.0 + 2.0 * EPSILON));
}

#[test]
fn boundary() {
    assert!(approx(0.0, 9.0e-9));
    assert!(!approx(0.0, 1.0e-8));
    assert!(!approx(0.0, 1.1e-8));
    assert!(approx(5.0, 5.0 + 9.0e-9));
    assert!(approx(5.0, 5.0 - 9.0e-9));
}

#[test]
fn non_finite() {
    assert!(!approx(f64::NAN, f64::NAN));
    assert!(!approx(f64::NAN, 0.0));
    assert!(!approx(f64::INFINITY, f64::INFINITY));
    assert!(!approx(f64::INFINITY, f64::NEG_INFINITY));
}
