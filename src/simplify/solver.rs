//! Classification of a single subproblem.
//!
//! A subproblem is a contiguous run of points whose first and last points are
//! already known to survive. The solver decides whether its interior can be
//! dropped or where it has to be split.

use super::metric::DeviationMetric;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Outcome of solving one subproblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fewer than three points: every point survives unchanged.
    Solved,
    /// Every interior point is within tolerance of the chord: only the two
    /// endpoints survive.
    Linearized,
    /// The point at `split` (relative to the subproblem start) deviates too
    /// much. The subproblem becomes `[0, split]` and `[split, len - 1]`.
    Divide {
        /// Index of the farthest interior point.
        split: usize,
    },
}

/// Classifies `points` as one subproblem.
///
/// The interior is scanned left to right and the first point reaching the
/// maximal deviation is reported, so equal deviations always split at the
/// leftmost candidate. Interior points lying exactly on the chord never force
/// a split, even with a zero tolerance.
///
/// A deviation the metric cannot represent (NaN, from a NaN coordinate or
/// from overflowing intermediates) counts as infinitely far from the chord,
/// so such points are kept rather than silently dropped.
pub fn solve<F, M>(points: &[Point2<F>], metric: &M, tolerance_squared: F) -> Outcome
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    let len = points.len();
    if len < 3 {
        return Outcome::Solved;
    }

    let chord = Segment2::new(points[0], points[len - 1]);
    let length_squared = chord.length_squared();

    let mut max_deviation = F::zero();
    let mut max_index = 0;

    for (i, &candidate) in points.iter().enumerate().take(len - 1).skip(1) {
        let mut deviation =
            metric.deviation_squared(chord.start, chord.end, candidate, length_squared);
        if deviation.is_nan() {
            deviation = F::infinity();
        }
        if deviation > max_deviation {
            max_deviation = deviation;
            max_index = i;
        }
    }

    if max_index == 0 || max_deviation < tolerance_squared {
        Outcome::Linearized
    } else {
        Outcome::Divide { split: max_index }
    }
}
