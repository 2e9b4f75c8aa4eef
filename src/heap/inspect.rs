//! Read-only diagnostics, used by test harnesses

use log::debug;

use super::PriorityQueue;
use crate::error::HeapError;

pub trait HeapInspect {
    /// Checks that no record has a smaller priority than its parent
    fn validate_internal_state(&self) -> Result<(), HeapError>;

    /// Lists the records by storage index, after a message
    fn debug_dump(&self, msg: &str) -> String;

    fn log_debug_info(&self, msg: &str) {
        debug!("{}", self.debug_dump(msg));
    }
}

impl HeapInspect for PriorityQueue {
    fn validate_internal_state(&self) -> Result<(), HeapError> {
        for parent in 0..self.len() {
            let children = [self.left_child(parent), self.right_child(parent)];
            for index in children.into_iter().flatten() {
                if self.priority(index) < self.priority(parent) {
                    return Err(HeapError::HeapInvariant { index, parent });
                }
            }
        }
        Ok(())
    }

    fn debug_dump(&self, msg: &str) -> String {
        let mut dump = msg.to_string();
        for (ix, record) in self.iter().enumerate() {
            dump.push_str(&format!("\n[{}] = {}", ix, record));
        }
        dump
    }
}
