//! 2D line segment type, used as the chord of a sub-range.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the squared length of the segment.
    ///
    /// Exactly zero when the endpoints coincide.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }
}
