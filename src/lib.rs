//! pathcompact - Polyline compaction with pluggable deviation metrics
//!
//! Dense polylines (GPS tracks, digitized curves, flattened vector paths)
//! often carry far more points than their shape needs. This library drops
//! the points that stay within a tolerance of the simplified path, using an
//! iterative Ramer-Douglas-Peucker algorithm that never recurses on the
//! native stack and can compact a buffer in place.
//!
//! ```
//! use pathcompact::{compact_in_place, MetricKind, Point2};
//!
//! let mut track: Vec<Point2<f64>> = (0..100)
//!     .map(|i| Point2::new(f64::from(i), if i % 2 == 0 { 0.0 } else { 0.01 }))
//!     .collect();
//!
//! compact_in_place(&mut track, 0.1, &MetricKind::SegmentDistance).unwrap();
//! assert_eq!(track, vec![Point2::new(0.0, 0.0), Point2::new(99.0, 0.01)]);
//! ```

pub mod error;
pub mod primitives;
pub mod simplify;

pub use error::CompactError;
pub use primitives::{Point2, Segment2, Vec2};
pub use simplify::{
    compact, compact_in_place, compact_in_place_with, compact_indices, compact_indices_with,
    compact_into, compact_into_with, compact_with, CompactOptions, DeviationMetric, MetricKind,
    PerpendicularOffset, SegmentDistance,
};
