//! Iterative Ramer-Douglas-Peucker path compaction.
//!
//! The classic algorithm recurses on the two halves of every split. Here the
//! recursion is replaced by an explicit work stack so that the depth of
//! the split tree (up to one level per input point for adversarial paths)
//! costs heap memory, never native stack.
//!
//! Results are assembled left to right. Each pending subproblem writes its
//! surviving points at the current write cursor, which never lies past the
//! subproblem's own start, and the copies run low to high. That is what
//! allows [`compact_in_place`] to read and write the same buffer.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use super::metric::DeviationMetric;
use super::options::CompactOptions;
use super::solver::{solve, Outcome};
use super::stack::{Subproblem, WorkStack};
use crate::error::CompactError;
use crate::primitives::Point2;
use num_traits::Float;
use std::ops::Range;

/// Compacts a polyline, returning the surviving points in a new vector.
///
/// The first and last points are always kept. A point is dropped when the
/// `metric` places it strictly closer than `tolerance` to the chord of the
/// subproblem it falls in.
///
/// # Errors
///
/// Returns [`CompactError::InvalidTolerance`] for a negative or NaN
/// tolerance, and [`CompactError::AllocationFailure`] if the work stack
/// cannot grow.
///
/// # Example
///
/// ```
/// use pathcompact::{compact, Point2, PerpendicularOffset};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the line, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from line, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let compacted = compact(&points, 0.5, &PerpendicularOffset).unwrap();
/// assert!(compacted.len() < points.len());
/// assert_eq!(compacted.first(), points.first());
/// assert_eq!(compacted.last(), points.last());
/// ```
pub fn compact<F, M>(
    points: &[Point2<F>],
    tolerance: F,
    metric: &M,
) -> Result<Vec<Point2<F>>, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    compact_with(points, tolerance, metric, &CompactOptions::default())
}

/// [`compact`] with explicit [`CompactOptions`].
pub fn compact_with<F, M>(
    points: &[Point2<F>],
    tolerance: F,
    metric: &M,
    options: &CompactOptions,
) -> Result<Vec<Point2<F>>, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    let tolerance_squared = checked_tolerance_squared(tolerance)?;

    let mut output = points.to_vec();
    let len = run(
        &mut InPlace(output.as_mut_slice()),
        tolerance_squared,
        metric,
        options,
    )?;
    output.truncate(len);
    Ok(output)
}

/// Compacts `input` into a separate `output` buffer.
///
/// Returns the number of valid points written to the front of `output`.
/// The rest of `output` is left in an unspecified state.
///
/// # Errors
///
/// Returns [`CompactError::OutputTooSmall`] if `output` is shorter than
/// `input`, plus the errors of [`compact`]. On error the contents of
/// `output` are unspecified.
pub fn compact_into<F, M>(
    input: &[Point2<F>],
    output: &mut [Point2<F>],
    tolerance: F,
    metric: &M,
) -> Result<usize, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    compact_into_with(input, output, tolerance, metric, &CompactOptions::default())
}

/// [`compact_into`] with explicit [`CompactOptions`].
pub fn compact_into_with<F, M>(
    input: &[Point2<F>],
    output: &mut [Point2<F>],
    tolerance: F,
    metric: &M,
    options: &CompactOptions,
) -> Result<usize, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    let tolerance_squared = checked_tolerance_squared(tolerance)?;
    if output.len() < input.len() {
        return Err(CompactError::OutputTooSmall {
            needed: input.len(),
            available: output.len(),
        });
    }

    run(
        &mut Separate { input, output },
        tolerance_squared,
        metric,
        options,
    )
}

/// Compacts a polyline using its own storage as the output buffer.
///
/// On success `points` is truncated to the compacted path; its capacity is
/// kept, call [`Vec::shrink_to_fit`] to release it. On error the contents of
/// `points` are unspecified: the original path is not preserved.
///
/// Produces exactly the same points as [`compact`] and [`compact_into`].
///
/// # Errors
///
/// Same as [`compact`].
pub fn compact_in_place<F, M>(
    points: &mut Vec<Point2<F>>,
    tolerance: F,
    metric: &M,
) -> Result<(), CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    compact_in_place_with(points, tolerance, metric, &CompactOptions::default())
}

/// [`compact_in_place`] with explicit [`CompactOptions`].
pub fn compact_in_place_with<F, M>(
    points: &mut Vec<Point2<F>>,
    tolerance: F,
    metric: &M,
    options: &CompactOptions,
) -> Result<(), CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    let tolerance_squared = checked_tolerance_squared(tolerance)?;
    let len = run(
        &mut InPlace(points.as_mut_slice()),
        tolerance_squared,
        metric,
        options,
    )?;
    points.truncate(len);
    Ok(())
}

/// Compacts a polyline and returns the indices of the surviving points.
///
/// Useful when the points carry associated data (timestamps, elevations)
/// that must be filtered alongside them. Indices are strictly increasing and
/// include `0` and `points.len() - 1` for any non-empty input.
///
/// # Errors
///
/// Same as [`compact`].
pub fn compact_indices<F, M>(
    points: &[Point2<F>],
    tolerance: F,
    metric: &M,
) -> Result<Vec<usize>, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    compact_indices_with(points, tolerance, metric, &CompactOptions::default())
}

/// [`compact_indices`] with explicit [`CompactOptions`].
pub fn compact_indices_with<F, M>(
    points: &[Point2<F>],
    tolerance: F,
    metric: &M,
    options: &CompactOptions,
) -> Result<Vec<usize>, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
{
    let tolerance_squared = checked_tolerance_squared(tolerance)?;

    let mut store = Indices {
        input: points,
        kept: Vec::new(),
    };
    run(&mut store, tolerance_squared, metric, options)?;
    Ok(store.kept)
}

/// Validates the tolerance and squares it.
fn checked_tolerance_squared<F: Float>(tolerance: F) -> Result<F, CompactError> {
    if tolerance.is_nan() || tolerance < F::zero() {
        return Err(CompactError::InvalidTolerance {
            tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(tolerance * tolerance)
}

/// Rejects split indices that would not shrink the subproblem.
fn checked_split(split: usize, len: usize) -> Result<usize, CompactError> {
    if split == 0 || split + 1 >= len {
        return Err(CompactError::MalformedSubproblem { split, len });
    }
    Ok(split)
}

/// Where the engine reads points from and writes survivors to.
trait PointStore<F> {
    /// The original points. Positions before the write cursor may already
    /// hold output.
    fn source(&self) -> &[Point2<F>];

    /// Appends the source points in `from` to the output at index `to`.
    fn emit(&mut self, from: Range<usize>, to: usize);
}

/// Input and output share one buffer.
struct InPlace<'a, F>(&'a mut [Point2<F>]);

impl<F: Float> PointStore<F> for InPlace<'_, F> {
    #[inline]
    fn source(&self) -> &[Point2<F>] {
        &self.0[..]
    }

    #[inline]
    fn emit(&mut self, from: Range<usize>, to: usize) {
        // Overlapping ranges are fine: `to <= from.start` and the copy is a memmove.
        self.0.copy_within(from, to);
    }
}

/// Output goes to a distinct buffer at least as long as the input.
struct Separate<'a, F> {
    input: &'a [Point2<F>],
    output: &'a mut [Point2<F>],
}

impl<F: Float> PointStore<F> for Separate<'_, F> {
    #[inline]
    fn source(&self) -> &[Point2<F>] {
        self.input
    }

    #[inline]
    fn emit(&mut self, from: Range<usize>, to: usize) {
        let count = from.len();
        self.output[to..to + count].copy_from_slice(&self.input[from]);
    }
}

/// Records which source indices survive instead of copying points.
struct Indices<'a, F> {
    input: &'a [Point2<F>],
    kept: Vec<usize>,
}

impl<F: Float> PointStore<F> for Indices<'_, F> {
    #[inline]
    fn source(&self) -> &[Point2<F>] {
        self.input
    }

    #[inline]
    fn emit(&mut self, from: Range<usize>, to: usize) {
        debug_assert_eq!(to, self.kept.len());
        self.kept.extend(from);
    }
}

/// Runs the compaction loop and returns the number of surviving points.
fn run<F, M, S>(
    store: &mut S,
    tolerance_squared: F,
    metric: &M,
    options: &CompactOptions,
) -> Result<usize, CompactError>
where
    F: Float,
    M: DeviationMetric<F> + ?Sized,
    S: PointStore<F>,
{
    let n = store.source().len();
    if n < 3 {
        // Nothing to decide, so no work stack is needed either.
        store.emit(0..n, 0);
        return Ok(n);
    }

    // The first point always survives and always lands at index 0. Every
    // subproblem skips its own first point, which was written as the last
    // point of its left neighbour (or here, for the leftmost one).
    store.emit(0..1, 0);
    let mut cursor = 1;

    let mut stack = WorkStack::new(options)?;
    stack.push(Subproblem::new(0, n))?;

    while let Some(sub) = stack.pop() {
        debug_assert!(cursor <= sub.start + 1);

        let outcome = solve(&store.source()[sub.range()], metric, tolerance_squared);
        match outcome {
            Outcome::Solved => {
                store.emit(sub.start + 1..sub.start + sub.len, cursor);
                cursor += sub.len - 1;
            }
            Outcome::Linearized => {
                let last = sub.last();
                store.emit(last..last + 1, cursor);
                cursor += 1;
            }
            Outcome::Divide { split } => {
                let split = checked_split(split, sub.len)?;
                let (left, right) = sub.split_at(split);
                // Right first, so the left half is popped and written first.
                stack.push(right)?;
                stack.push(left)?;
            }
        }
    }

    Ok(cursor)
}
