//! Correction curves.
//!
//! A correction curve maps a raw attribute value to an effective scaling
//! percentage through piecewise-linear interpolation over an ordered
//! breakpoint sequence. Values outside the sequence clamp to the endpoint
//! percentages, which is what produces the soft-cap behavior of high stats.

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a correction curve (the "graph id" in the source tables).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CurveId(pub u16);

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One breakpoint of a correction curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Attribute value at which this breakpoint applies.
    pub breakpoint: u32,
    /// Output scaling percentage at the breakpoint.
    pub percentage: f64,
}

/// A piecewise-linear curve over strictly increasing breakpoints.
///
/// Construction validates the sequence; evaluation is pure, deterministic,
/// and never extrapolates beyond the clamped endpoints.
///
/// # Examples
///
/// ```rust
/// use arcalc::CorrectionCurve;
///
/// let curve = CorrectionCurve::from_pairs([(1, 0.0), (20, 50.0), (80, 90.0)]).unwrap();
///
/// assert_eq!(curve.evaluate(20), 50.0);  // exact breakpoint
/// assert_eq!(curve.evaluate(0), 0.0);    // clamped below
/// assert_eq!(curve.evaluate(150), 90.0); // clamped above
/// assert!((curve.evaluate(50) - 70.0).abs() < 1e-9); // interpolated
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionCurve {
    points: Vec<CurvePoint>,
}

impl CorrectionCurve {
    /// Create a curve from an ordered breakpoint sequence.
    ///
    /// Fails with `MalformedTable` if the sequence is empty or the
    /// breakpoints are not strictly increasing.
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, RatingError> {
        if points.is_empty() {
            return Err(RatingError::MalformedTable(String::from(
                "correction curve has no breakpoints",
            )));
        }

        for pair in points.windows(2) {
            if pair[1].breakpoint <= pair[0].breakpoint {
                return Err(RatingError::MalformedTable(format!(
                    "curve breakpoints not strictly increasing: {} then {}",
                    pair[0].breakpoint, pair[1].breakpoint
                )));
            }
        }

        Ok(Self { points })
    }

    /// Create a curve from `(breakpoint, percentage)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, RatingError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(breakpoint, percentage)| CurvePoint {
                    breakpoint,
                    percentage,
                })
                .collect(),
        )
    }

    /// The breakpoint sequence, in increasing order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Evaluate the curve at an attribute value.
    ///
    /// Returns the percentage of the bracketing segment, linearly
    /// interpolated; values at or beyond either endpoint return that
    /// endpoint's percentage.
    pub fn evaluate(&self, value: u32) -> f64 {
        let first = self.points[0];
        if value <= first.breakpoint {
            return first.percentage;
        }

        let last = self.points[self.points.len() - 1];
        if value >= last.breakpoint {
            return last.percentage;
        }

        // Short sequences, linear scan for the bracketing pair.
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.breakpoint {
                let span = f64::from(hi.breakpoint - lo.breakpoint);
                let offset = f64::from(value - lo.breakpoint);
                return lo.percentage + (hi.percentage - lo.percentage) * offset / span;
            }
        }

        // Unreachable: value < last.breakpoint guarantees a bracketing pair.
        last.percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft_cap_curve() -> CorrectionCurve {
        CorrectionCurve::from_pairs([(1, 0.0), (18, 25.0), (60, 75.0), (80, 90.0), (150, 110.0)])
            .unwrap()
    }

    #[test]
    fn test_exact_breakpoints() {
        let curve = soft_cap_curve();
        assert_eq!(curve.evaluate(1), 0.0);
        assert_eq!(curve.evaluate(18), 25.0);
        assert_eq!(curve.evaluate(60), 75.0);
        assert_eq!(curve.evaluate(150), 110.0);
    }

    #[test]
    fn test_interpolation() {
        let curve = CorrectionCurve::from_pairs([(0, 0.0), (100, 100.0)]).unwrap();
        assert!((curve.evaluate(25) - 25.0).abs() < 1e-9);
        assert!((curve.evaluate(99) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamping() {
        let curve = soft_cap_curve();
        assert_eq!(curve.evaluate(0), 0.0);
        assert_eq!(curve.evaluate(151), 110.0);
        assert_eq!(curve.evaluate(10_000), 110.0);
    }

    #[test]
    fn test_monotonic_for_non_decreasing_percentages() {
        let curve = soft_cap_curve();
        let mut previous = curve.evaluate(0);
        for value in 1..200 {
            let current = curve.evaluate(value);
            assert!(
                current >= previous,
                "curve decreased at {value}: {previous} -> {current}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_single_point_curve() {
        let curve = CorrectionCurve::from_pairs([(40, 60.0)]).unwrap();
        assert_eq!(curve.evaluate(0), 60.0);
        assert_eq!(curve.evaluate(40), 60.0);
        assert_eq!(curve.evaluate(99), 60.0);
    }

    #[test]
    fn test_empty_curve_rejected() {
        let err = CorrectionCurve::new(Vec::new()).unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }

    #[test]
    fn test_non_increasing_breakpoints_rejected() {
        let err = CorrectionCurve::from_pairs([(10, 0.0), (10, 50.0)]).unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));

        let err = CorrectionCurve::from_pairs([(10, 0.0), (5, 50.0)]).unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }
}
