//! Binary-heap priority queue over (label, priority) records, and streaming
//! top-K selection built on top of it.

pub mod base;
pub mod error;
pub mod heap;
pub mod select;

#[cfg(feature = "python")]
mod py;
