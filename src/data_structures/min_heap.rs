use crate::{Error, Result};
use std::fmt::Debug;

/// An array-backed binary min-heap of `(key, item)` entries used as the
/// scheduling structure in shortest path algorithms.
///
/// Index 0 holds the root; every parent's key is less than or equal to both
/// children's keys. Entries are ordered by key alone - the item never
/// participates in comparisons, so equal-key entries surface in an order
/// dictated only by heap structure.
#[derive(Debug, Clone)]
pub struct MinHeap<K, T>
where
    K: Ord + Copy + Debug,
{
    entries: Vec<(K, T)>,
}

impl<K, T> MinHeap<K, T>
where
    K: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty heap with capacity for the given number of entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the heap has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the smallest key and a reference to its item without
    /// removing the entry
    pub fn peek(&self) -> Option<(K, &T)> {
        self.entries.first().map(|(key, item)| (*key, item))
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts an entry, then restores the heap order by swapping it upward
    /// while its parent's key is larger. O(log n).
    pub fn push(&mut self, key: K, item: T) {
        self.entries.push((key, item));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest key. O(log n).
    ///
    /// Fails with [`Error::EmptyQueue`] when the heap is empty.
    pub fn pop(&mut self) -> Result<(K, T)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        // Move the last entry into the root slot, then let it settle.
        let entry = self.entries.swap_remove(0);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok(entry)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].0 <= self.entries[index].0 {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            // Strict comparisons keep the left child preferred when both
            // children carry equal keys.
            if left < size && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < size && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<K, T> Default for MinHeap<K, T>
where
    K: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
