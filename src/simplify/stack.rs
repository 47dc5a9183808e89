//! Explicit work stack replacing call recursion.
//!
//! Capacity grows in fixed chunks through `try_reserve_exact`, so a failed
//! allocation surfaces as an error instead of aborting the process, and the
//! optional item limit bounds the auxiliary memory of one compaction.

use super::options::CompactOptions;
use crate::error::CompactError;
use std::ops::Range;

/// A pending run of points, `len` points starting at `start`.
///
/// The run's destination in the result buffer has the same offset as its
/// source, which is what lets input and output share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subproblem {
    pub start: usize,
    pub len: usize,
}

impl Subproblem {
    /// Creates a subproblem covering `len` points from `start`.
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Index range of the points in this subproblem.
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Index of the last point.
    #[inline]
    pub fn last(self) -> usize {
        self.start + self.len - 1
    }

    /// Splits at relative index `split`, which becomes the last point of the
    /// left half and the first point of the right half.
    #[inline]
    pub fn split_at(self, split: usize) -> (Self, Self) {
        (
            Self::new(self.start, split + 1),
            Self::new(self.start + split, self.len - split),
        )
    }
}

/// LIFO stack of pending work with fallible, chunked growth.
#[derive(Debug)]
pub struct WorkStack<T> {
    items: Vec<T>,
    chunk: usize,
    limit: Option<usize>,
}

impl<T> WorkStack<T> {
    /// Allocates a stack holding one chunk, or fewer if the limit is smaller.
    pub fn new(options: &CompactOptions) -> Result<Self, CompactError> {
        let chunk = options.effective_chunk();
        let limit = options.max_stack_items;
        let initial = limit.map_or(chunk, |limit| chunk.min(limit));

        let mut items = Vec::new();
        items
            .try_reserve_exact(initial)
            .map_err(|_| CompactError::AllocationFailure { requested: initial })?;

        Ok(Self {
            items,
            chunk,
            limit,
        })
    }

    /// Pushes an item, growing the stack by one chunk when it is full.
    pub fn push(&mut self, item: T) -> Result<(), CompactError> {
        if let Some(limit) = self.limit {
            if self.items.len() >= limit {
                return Err(CompactError::AllocationFailure {
                    requested: self.items.len() + 1,
                });
            }
        }

        if self.items.len() == self.items.capacity() {
            let mut additional = self.chunk;
            if let Some(limit) = self.limit {
                additional = additional.min(limit - self.items.len());
            }
            let requested = self.items.capacity().saturating_add(additional);
            self.items
                .try_reserve_exact(additional)
                .map_err(|_| CompactError::AllocationFailure { requested })?;
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the most recently pushed item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of pending items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items the stack can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}
