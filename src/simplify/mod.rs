//! Polyline compaction with the Ramer-Douglas-Peucker algorithm.
//!
//! The entry points live in [`rdp`] and are re-exported here and at the
//! crate root. The pieces they are built from are public as well, so a
//! caller can plug in a custom [`DeviationMetric`] or drive the
//! [`solver`] directly.

pub mod metric;
mod options;
mod rdp;
pub mod solver;
mod stack;

pub use metric::{DeviationMetric, MetricKind, PerpendicularOffset, SegmentDistance};
pub use options::{CompactOptions, DEFAULT_STACK_CHUNK};
pub use rdp::{
    compact, compact_in_place, compact_in_place_with, compact_indices, compact_indices_with,
    compact_into, compact_into_with, compact_with,
};
pub use solver::Outcome;
