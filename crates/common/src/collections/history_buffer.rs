//! A fixed-capacity, newest-first history buffer.
//!
//! A [`HistoryBuffer`] keeps the most recent `capacity` items in
//! reverse-insertion order: logical index `0` is always the item pushed
//! last. When [`push`](HistoryBuffer::push) receives a value and the buffer
//! is full, the oldest item (the highest logical index) is discarded.
//!
//! # Complexity
//! - `push`, `get`, `len`, `is_empty`, `capacity`, and `iter` are all O(1)
//!   time (`push` amortized).
//!
//! # Panic Safety
//! - Public methods avoid panicking; there are no `unwrap`/`expect` calls in
//!   the implementation.

use std::collections::VecDeque;

/// A fixed-capacity buffer storing elements in newest-first order.
///
/// # Examples
///
/// ```rust
/// use slotwatch_common::HistoryBuffer;
///
/// let mut history = HistoryBuffer::new(3);
/// history.push(1);
/// history.push(2);
/// history.push(3);
/// history.push(4); // discards the oldest item (`1`)
///
/// assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
/// assert_eq!(history.get(0), Some(&4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryBuffer<T> {
    /// Creates a new buffer with the provided capacity.
    ///
    /// A capacity of zero is clamped to `1`, ensuring at least one slot
    /// without panicking.
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { buf: VecDeque::with_capacity(capacity), capacity }
    }

    /// Pushes an item to the front of the buffer, discarding the oldest item
    /// when full.
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.buf.len() >= self.capacity {
            let _ = self.buf.pop_back();
        }
        self.buf.push_front(item);
    }

    /// Returns a reference to the value at `idx`, counting from the newest
    /// element. `idx == 0` is always the most recently pushed item.
    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.buf.get(idx)
    }

    /// Returns the number of items currently stored.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when the buffer has no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the maximum number of items the buffer can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all elements, leaving the capacity unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns an iterator visiting elements from newest to oldest.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}

impl<T: Clone> HistoryBuffer<T> {
    /// Returns an owned, newest-first copy of the current contents.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a HistoryBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
