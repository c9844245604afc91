//! Restores input order for results that complete out of order

use std::collections::BTreeMap;

/// Holds completed results keyed by line index and releases them only as a
/// contiguous prefix becomes available.
#[derive(Debug)]
pub struct ReorderBuffer<T> {
    next: usize,
    pending: BTreeMap<usize, T>,
}

impl<T> Default for ReorderBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReorderBuffer<T> {
    /// Create a buffer expecting index 0 first
    pub fn new() -> Self {
        Self {
            next: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Store the result for `index`
    pub fn insert(&mut self, index: usize, item: T) {
        debug_assert!(index >= self.next, "index {index} already released");
        self.pending.insert(index, item);
    }

    /// Take the next in-order result if it has completed
    pub fn pop_ready(&mut self) -> Option<T> {
        let item = self.pending.remove(&self.next)?;
        self.next += 1;
        Some(item)
    }

    /// Index of the next result to be released
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Number of completed results waiting on an earlier one
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
