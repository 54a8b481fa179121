//! Bounded FIFO with drop-oldest trimming

use std::collections::VecDeque;

/// Default number of events each input queue retains
pub const DEFAULT_CAPACITY: usize = 16;

/// Fixed-capacity FIFO shared by the keyboard and mouse queues
///
/// Pushing past capacity discards the oldest entries, never the newest.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` items
    ///
    /// A capacity of zero is raised to one so the newest item always survives.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends an item, then trims the front until back within capacity
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.trim();
    }

    /// Removes and returns the oldest item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Oldest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards every queued item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates oldest to newest without consuming
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn trim(&mut self) {
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
