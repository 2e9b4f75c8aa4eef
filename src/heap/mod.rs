//! Priority queue implemented as a binary min-heap over a growable array.
//!
//! The element at position `i` has its parent at `(i-1)/2` and its children
//! at `2i+1` and `2i+2`. The storage grows geometrically (doubling by
//! default) when full and never shrinks.

pub mod inspect;

use derivative::Derivative;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    base::{Len, Priority, Record},
    error::HeapError,
};

#[derive(Derivative, Clone, Debug, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
pub struct HeapOptions {
    /// Number of slots allocated when the queue is created
    /// (at least 1)
    #[derivative(Default(value = "10"))]
    pub initial_capacity: usize,

    /// The capacity is multiplied by this factor each time the
    /// storage is full (at least 2)
    #[derivative(Default(value = "2"))]
    pub growth_factor: usize,
}

/// Min-heap of records keyed by priority
///
/// The root (position 0) always holds a record with the smallest priority.
/// Records with equal priorities are not extracted in any particular order.
#[derive(Clone, Debug)]
pub struct PriorityQueue {
    /// Occupied slots (the logical size is the vector length)
    elements: Vec<Record>,

    /// Number of allocated slots
    capacity: usize,

    growth_factor: usize,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::with_options(&HeapOptions::default())
    }

    pub fn with_options(options: &HeapOptions) -> Self {
        let mut capacity = options.initial_capacity;
        if capacity == 0 {
            warn!("Initial capacity of a priority queue should be positive, using 1");
            capacity = 1;
        }

        let mut growth_factor = options.growth_factor;
        if growth_factor < 2 {
            warn!(
                "Growth factor {} is too small for geometric growth, using 2",
                growth_factor
            );
            growth_factor = 2;
        }

        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
            growth_factor,
        }
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all the records (the capacity is kept)
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates over the records in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.elements.iter()
    }

    /// Adds a new record
    pub fn enqueue(&mut self, record: Record) {
        if self.elements.len() == self.capacity {
            self.grow();
        }

        self.elements.push(record);
        self.sift_up(self.elements.len() - 1);
    }

    /// Returns the record with the smallest priority without removing it
    pub fn peek(&self) -> Result<&Record, HeapError> {
        self.elements.first().ok_or(HeapError::EmptyQueue)
    }

    /// Removes and returns the record with the smallest priority
    pub fn dequeue(&mut self) -> Result<Record, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        // The last record takes the place of the root
        let front = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(front)
    }

    /// Dequeues records (by increasing priority) until the queue is empty
    pub fn drain_sorted(&mut self) -> DrainSorted<'_> {
        DrainSorted { queue: self }
    }

    pub fn into_sorted_vec(mut self) -> Vec<Record> {
        self.drain_sorted().collect()
    }

    /// Allocates a new storage and moves the records into it
    fn grow(&mut self) {
        let capacity = self.capacity.saturating_mul(self.growth_factor);
        debug!(
            "Growing priority queue storage from {} to {} slots",
            self.capacity, capacity
        );

        let mut elements = Vec::with_capacity(capacity);
        elements.append(&mut self.elements);
        self.elements = elements;
        self.capacity = capacity;
    }

    #[inline]
    fn priority(&self, index: usize) -> Priority {
        self.elements[index].priority
    }

    #[inline]
    pub(crate) fn parent(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    #[inline]
    pub(crate) fn left_child(&self, index: usize) -> Option<usize> {
        let child = 2 * index + 1;
        (child < self.elements.len()).then_some(child)
    }

    #[inline]
    pub(crate) fn right_child(&self, index: usize) -> Option<usize> {
        let child = 2 * index + 2;
        (child < self.elements.len()).then_some(child)
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent(index) {
            if self.priority(parent) <= self.priority(index) {
                break;
            }
            self.elements.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(left) = self.left_child(index) {
            // Left child wins ties
            let child = match self.right_child(index) {
                Some(right) if self.priority(right) < self.priority(left) => right,
                _ => left,
            };

            if self.priority(child) >= self.priority(index) {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }

    /// Builds a queue from raw storage, without restoring the heap order
    #[cfg(test)]
    pub(crate) fn from_storage(elements: Vec<Record>) -> Self {
        let capacity = elements.len().max(1);
        Self {
            elements,
            capacity,
            growth_factor: 2,
        }
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Len for PriorityQueue {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Extend<Record> for PriorityQueue {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.enqueue(record);
        }
    }
}

impl FromIterator<Record> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Iterator returned by [PriorityQueue::drain_sorted]
pub struct DrainSorted<'a> {
    queue: &'a mut PriorityQueue,
}

impl Iterator for DrainSorted<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}
