//! Top-K selection with a bounded min-heap
//!
//! Runs in O(N log k) instead of O(N k) for the sorted buffer; the root of
//! the heap is the smallest retained record.

use log::debug;

use crate::{
    base::Record,
    heap::{HeapOptions, PriorityQueue},
};

/// Largest initial capacity requested for the working heap
const MAX_INITIAL_CAPACITY: usize = 1024;

/// Same contract as [super::select_top_k]: records are sorted by decreasing
/// priority, and among equal priorities the first records read are kept
/// (their relative order is not specified)
pub fn select_top_k_heap(source: &mut dyn Iterator<Item = Record>, top_k: usize) -> Vec<Record> {
    if top_k == 0 {
        return Vec::new();
    }

    let mut queue = PriorityQueue::with_options(&HeapOptions {
        initial_capacity: top_k.min(MAX_INITIAL_CAPACITY),
        ..Default::default()
    });

    let mut count = 0usize;
    for record in source {
        count += 1;
        if queue.len() < top_k {
            queue.enqueue(record);
            continue;
        }

        let replace = match queue.peek() {
            Ok(min) => min.priority < record.priority,
            Err(_) => false,
        };
        if replace {
            let _ = queue.dequeue();
            queue.enqueue(record);
        }
    }

    debug!("Selected {} records out of {}", queue.len(), count);
    let mut records = queue.into_sorted_vec();
    records.reverse();
    records
}
