use std::fmt;

use serde::{Deserialize, Serialize};

pub type Priority = f64;

/// Marks object that have a length
pub trait Len {
    fn len(&self) -> usize;
}

/// A record = label + priority
///
/// The label is an opaque payload: only the priority is used to order
/// records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub priority: Priority,
}

impl Record {
    pub fn new(label: impl Into<String>, priority: Priority) -> Self {
        Self {
            label: label.into(),
            priority,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.label, self.priority)
    }
}

impl From<(&str, Priority)> for Record {
    fn from((label, priority): (&str, Priority)) -> Self {
        Record::new(label, priority)
    }
}

/// A top-K selection function
///
/// Consumes the source and returns (at most) `top_k` records sorted by
/// decreasing priority
pub type SelectFn = fn(source: &mut dyn Iterator<Item = Record>, top_k: usize) -> Vec<Record>;
