//! Tuning knobs for the compaction engine.

/// Number of subproblems the work stack starts with and grows by.
pub const DEFAULT_STACK_CHUNK: usize = 2048;

/// Options controlling the auxiliary memory used by a compaction.
///
/// The defaults suit almost every input: the work stack grows in chunks of
/// [`DEFAULT_STACK_CHUNK`] subproblems with no upper bound. Set
/// [`max_stack_items`](Self::max_stack_items) to cap the memory a single
/// call may use; exceeding it fails the call with
/// [`CompactError::AllocationFailure`](crate::CompactError::AllocationFailure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompactOptions {
    /// Subproblems allocated up front and added on each growth step.
    /// Zero is treated as one.
    pub stack_chunk: usize,

    /// Maximum number of pending subproblems, or `None` for no limit.
    pub max_stack_items: Option<usize>,
}

impl CompactOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stack growth unit.
    #[must_use]
    pub fn with_stack_chunk(mut self, stack_chunk: usize) -> Self {
        self.stack_chunk = stack_chunk;
        self
    }

    /// Caps the number of pending subproblems.
    #[must_use]
    pub fn with_max_stack_items(mut self, max_stack_items: usize) -> Self {
        self.max_stack_items = Some(max_stack_items);
        self
    }

    /// Growth unit actually used by the stack.
    #[inline]
    pub(crate) fn effective_chunk(&self) -> usize {
        self.stack_chunk.max(1)
    }
}

impl Default for CompactOptions {
    fn default() -> Self {
        Self {
            stack_chunk: DEFAULT_STACK_CHUNK,
            max_stack_items: None,
        }
    }
}
