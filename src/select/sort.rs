use crate::{base::Record, heap::PriorityQueue};

/// Sorts records by increasing priority, using a priority queue
pub fn pq_sort(records: &mut Vec<Record>) {
    let mut queue: PriorityQueue = records.drain(..).collect();
    records.extend(queue.drain_sorted());
}
