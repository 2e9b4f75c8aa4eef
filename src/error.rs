use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Raised by the validator: the child at `index` has a smaller priority
    /// than its parent
    #[error("the priority of index {index} has an incorrect priority relationship to its parent {parent}")]
    HeapInvariant { index: usize, parent: usize },
}
