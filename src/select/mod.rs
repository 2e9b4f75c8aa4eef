//! Top-K selection over a stream of records

pub mod heap;
pub mod sort;

use log::debug;

use crate::base::{Len, Priority, Record};

/// Bounded buffer holding the best records seen so far, sorted by
/// decreasing priority
pub struct TopRecords {
    records: Vec<Record>,
    top_k: usize,
}

impl TopRecords {
    pub fn new(top_k: usize) -> Self {
        Self {
            records: Vec::new(),
            top_k,
        }
    }

    /// Add a new candidate, and returns the new lower bound on priorities
    pub fn add(&mut self, record: Record) -> Priority {
        if self.records.len() < self.top_k {
            self.insert_sorted(record);
        } else if let Some(last) = self.records.last() {
            // Records strictly below the current minimum cannot make it
            if last.priority <= record.priority {
                self.insert_sorted(record);
                self.records.pop();
            }
        }

        self.threshold()
    }

    /// Minimum priority a record needs to be kept
    ///
    /// Returns -infinity while the buffer is not full
    pub fn threshold(&self) -> Priority {
        if self.records.len() < self.top_k {
            Priority::NEG_INFINITY
        } else {
            self.records
                .last()
                .map_or(Priority::INFINITY, |record| record.priority)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }

    /// Inserts after the records with the same priority, shifting the
    /// smaller ones
    fn insert_sorted(&mut self, record: Record) {
        let position = self
            .records
            .partition_point(|other| other.priority >= record.priority);
        self.records.insert(position, record);
    }
}

impl Len for TopRecords {
    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Returns the `top_k` records with the highest priorities, sorted by
/// decreasing priority
///
/// Records are read one at a time; at most `top_k` of them are held in
/// memory. Among records with the same priority, the first ones read are
/// kept and come first.
pub fn select_top_k(source: &mut dyn Iterator<Item = Record>, top_k: usize) -> Vec<Record> {
    let mut top = TopRecords::new(top_k);
    if top_k == 0 {
        return top.into_vec();
    }

    let mut count = 0usize;
    for record in source {
        top.add(record);
        count += 1;
    }

    debug!("Selected {} records out of {}", top.len(), count);
    top.into_vec()
}
