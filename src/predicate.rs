//! Validation predicates applied to a candidate before it joins a registry.
//!
//! Kept as free functions so each rule can be checked in isolation.

use crate::set::FuzzySet;

/// True if `candidate` may not coexist with `existing`.
///
/// The candidate is refused when any of:
///
/// - its left edge lies strictly inside `existing`'s `(a, c)` span,
/// - its right edge lies strictly inside `existing`'s `(b, d)` span,
/// - its support contains `existing`'s support (non-strict at both ends).
///
/// The rule is asymmetric: it constrains where the *candidate* starts and ends
/// relative to the existing set, not the other way round.
pub fn supports_illegally_overlap(candidate: &FuzzySet, existing: &FuzzySet) -> bool {
    let (a, d) = candidate.support();
    let starts_inside = existing.a() < a && a < existing.c();
    let ends_inside = existing.b() < d && d < existing.d();
    let contains = a <= existing.a() && existing.d() <= d;
    starts_inside || ends_inside || contains
}

/// True if a membership sum is acceptable at a defining point.
///
/// A sum of exactly zero means no set covers the point. Any other sum must be
/// within `tolerance` of 1.
pub fn sum_is_unity(sum: f64, tolerance: f64) -> bool {
    if sum == 0.0 {
        return true;
    }
    // f64::abs is std-only before Rust 1.85
    let diff = sum - 1.0;
    diff <= tolerance && -diff <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(a: f64, b: f64, c: f64, d: f64) -> FuzzySet {
        FuzzySet::new("s", a, b, c, d).unwrap()
    }

    #[test]
    fn test_disjoint_supports_allowed() {
        let existing = set(0.0, 1.0, 2.0, 3.0);
        assert!(!supports_illegally_overlap(&set(5.0, 6.0, 6.0, 7.0), &existing));
        assert!(!supports_illegally_overlap(&set(-7.0, -6.0, -6.0, -5.0), &existing));
    }

    #[test]
    fn test_touching_supports_allowed() {
        let existing = set(0.0, 2.0, 2.0, 4.0);
        assert!(!supports_illegally_overlap(&set(4.0, 6.0, 6.0, 8.0), &existing));
    }

    #[test]
    fn test_left_edge_inside_rejected() {
        let existing = set(0.0, 2.0, 4.0, 6.0);
        assert!(supports_illegally_overlap(&set(1.0, 7.0, 7.0, 9.0), &existing));
        assert!(supports_illegally_overlap(&set(3.9, 7.0, 7.0, 9.0), &existing));
    }

    #[test]
    fn test_left_edge_on_falling_ramp_allowed() {
        // a == existing.c is not strictly inside (a, c)
        let existing = set(0.0, 2.0, 4.0, 6.0);
        assert!(!supports_illegally_overlap(&set(4.0, 6.0, 6.0, 8.0), &existing));
    }

    #[test]
    fn test_right_edge_inside_rejected() {
        let existing = set(0.0, 2.0, 4.0, 6.0);
        assert!(supports_illegally_overlap(&set(-4.0, -2.0, -2.0, 5.0), &existing));
        assert!(supports_illegally_overlap(&set(-4.0, -2.0, -2.0, 2.1), &existing));
    }

    #[test]
    fn test_right_edge_on_rising_ramp_allowed() {
        // d == existing.b is not strictly inside (b, d)
        let existing = set(0.0, 2.0, 4.0, 6.0);
        assert!(!supports_illegally_overlap(&set(-2.0, 0.0, 0.0, 2.0), &existing));
    }

    #[test]
    fn test_containment_rejected() {
        let existing = set(0.0, 2.0, 4.0, 6.0);
        assert!(supports_illegally_overlap(&set(-1.0, 1.0, 5.0, 7.0), &existing));
        // identical support counts as containment
        assert!(supports_illegally_overlap(&set(0.0, 1.0, 5.0, 6.0), &existing));
    }

    #[test]
    fn test_sum_is_unity() {
        assert!(sum_is_unity(0.0, f64::EPSILON));
        assert!(sum_is_unity(1.0, f64::EPSILON));
        assert!(sum_is_unity(0.5 + 0.5, f64::EPSILON));
        assert!(!sum_is_unity(0.5, f64::EPSILON));
        assert!(!sum_is_unity(1.3, f64::EPSILON));
        assert!(!sum_is_unity(f64::NAN, f64::EPSILON));
    }

    #[test]
    fn test_sum_is_unity_respects_tolerance() {
        assert!(!sum_is_unity(1.001, f64::EPSILON));
        assert!(sum_is_unity(1.001, 0.01));
        assert!(sum_is_unity(0.999, 0.01));
    }
}
