//! Deviation metrics for path compaction.
//!
//! A metric measures how far a candidate point strays from the chord of the
//! sub-range it belongs to. Every metric returns a *squared* value so the
//! compaction engine can compare against a squared tolerance without ever
//! taking a square root.
//!
//! Two metrics are built in:
//!
//! - [`PerpendicularOffset`]: distance to the infinite line through the chord.
//! - [`SegmentDistance`]: distance to the finite chord segment.
//!
//! [`MetricKind`] selects between them at runtime, and any closure with the
//! signature `Fn(start, end, candidate, segment_length_squared) -> F` can be
//! used as a metric as well.

use crate::primitives::Point2;
use num_traits::Float;

/// Squared deviation of a point from a reference segment.
///
/// Implementations must be pure functions of their arguments and return a
/// non-negative value.
pub trait DeviationMetric<F: Float> {
    /// Returns the squared deviation of `candidate` from the segment
    /// `start -> end`.
    ///
    /// `segment_length_squared` is the squared distance between `start` and
    /// `end`. The caller computes it once per sub-range and passes it to
    /// every call, so implementations should not recompute it. It is zero
    /// when the endpoints coincide.
    fn deviation_squared(
        &self,
        start: Point2<F>,
        end: Point2<F>,
        candidate: Point2<F>,
        segment_length_squared: F,
    ) -> F;
}

impl<F, T> DeviationMetric<F> for T
where
    F: Float,
    T: Fn(Point2<F>, Point2<F>, Point2<F>, F) -> F,
{
    #[inline]
    fn deviation_squared(
        &self,
        start: Point2<F>,
        end: Point2<F>,
        candidate: Point2<F>,
        segment_length_squared: F,
    ) -> F {
        self(start, end, candidate, segment_length_squared)
    }
}

/// Squared distance from the candidate to the infinite line through the
/// segment.
///
/// Computed as the squared doubled triangle area over the squared segment
/// length. Points beyond either endpoint are measured against the line's
/// extension, so a point far out along the chord direction scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerpendicularOffset;

impl<F: Float> DeviationMetric<F> for PerpendicularOffset {
    #[inline]
    fn deviation_squared(
        &self,
        start: Point2<F>,
        end: Point2<F>,
        candidate: Point2<F>,
        segment_length_squared: F,
    ) -> F {
        perpendicular_offset_squared(start, end, candidate, segment_length_squared)
    }
}

/// Squared distance from the candidate to the finite segment.
///
/// With `A = end - start`, `B = candidate - start` and `C = candidate - end`,
/// the candidate projects strictly inside the segment when `A·B > 0` and
/// `A·C < 0`; the perpendicular offset is returned then. Otherwise the
/// nearest point is `start` when `A·B <= 0` (result `|B|²`) and `end` when
/// `A·C >= 0` (result `|C|²`). A dot product of exactly zero lands in the
/// endpoint branch, where both formulas agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentDistance;

impl<F: Float> DeviationMetric<F> for SegmentDistance {
    fn deviation_squared(
        &self,
        start: Point2<F>,
        end: Point2<F>,
        candidate: Point2<F>,
        segment_length_squared: F,
    ) -> F {
        let b = candidate - start;
        if segment_length_squared == F::zero() {
            return b.magnitude_squared();
        }

        let a = end - start;
        if a.dot(b) <= F::zero() {
            return b.magnitude_squared();
        }

        // Projection test: the foot of the perpendicular lies past `end`.
        let c = candidate - end;
        if a.dot(c) >= F::zero() {
            return c.magnitude_squared();
        }

        perpendicular_offset_squared(start, end, candidate, segment_length_squared)
    }
}

/// Runtime selection of a built-in deviation metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetricKind {
    /// See [`PerpendicularOffset`].
    #[default]
    PerpendicularOffset,
    /// See [`SegmentDistance`].
    SegmentDistance,
}

impl<F: Float> DeviationMetric<F> for MetricKind {
    #[inline]
    fn deviation_squared(
        &self,
        start: Point2<F>,
        end: Point2<F>,
        candidate: Point2<F>,
        segment_length_squared: F,
    ) -> F {
        match *self {
            Self::PerpendicularOffset => PerpendicularOffset.deviation_squared(
                start,
                end,
                candidate,
                segment_length_squared,
            ),
            Self::SegmentDistance => {
                SegmentDistance.deviation_squared(start, end, candidate, segment_length_squared)
            }
        }
    }
}

/// Squared cross product over squared length, shared by both built-in metrics.
///
/// Falls back to the squared distance from `start` for a zero-length segment.
#[inline]
fn perpendicular_offset_squared<F: Float>(
    start: Point2<F>,
    end: Point2<F>,
    candidate: Point2<F>,
    segment_length_squared: F,
) -> F {
    if segment_length_squared == F::zero() {
        return candidate.distance_squared(start);
    }

    let area = (end - start).cross(candidate - start);

    area * area / segment_length_squared
}
