//! Error types for path compaction.

use thiserror::Error;

/// Errors that can occur while compacting a path.
///
/// Argument errors are reported before any buffer is touched. The other
/// variants abort a compaction midway; the output buffer contents are then
/// unspecified and must not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompactError {
    /// Tolerance is negative or NaN.
    #[error("tolerance must be a non-negative number, got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance, widened to `f64`.
        tolerance: f64,
    },

    /// The output buffer cannot hold as many points as the input.
    #[error("output buffer holds {available} points but the input has {needed}")]
    OutputTooSmall {
        /// Number of input points.
        needed: usize,
        /// Length of the supplied output buffer.
        available: usize,
    },

    /// The work stack could not grow.
    #[error("work stack could not grow to {requested} pending subproblems")]
    AllocationFailure {
        /// Stack capacity that was requested when growth failed.
        requested: usize,
    },

    /// A subproblem was split at an index outside its bounds.
    #[error("split index {split} is outside a subproblem of {len} points")]
    MalformedSubproblem {
        /// The offending split index, relative to the subproblem start.
        split: usize,
        /// Number of points in the subproblem.
        len: usize,
    },
}
