use log::debug;
use pyo3::exceptions::{PyAssertionError, PyIndexError};
use pyo3::{pyclass, pyfunction, pymethods, pymodule, types::PyModule, PyErr, PyResult, Python};
use pyo3::wrap_pyfunction;

use crate::base::{Priority, Record};
use crate::error::HeapError;
use crate::heap::{inspect::HeapInspect, HeapOptions, PriorityQueue};
use crate::select::{heap::select_top_k_heap, select_top_k, sort::pq_sort};

impl From<HeapError> for PyErr {
    fn from(err: HeapError) -> PyErr {
        match err {
            HeapError::EmptyQueue => PyIndexError::new_err(err.to_string()),
            HeapError::HeapInvariant { .. } => PyAssertionError::new_err(err.to_string()),
        }
    }
}

#[pyclass(name = "Record")]
#[derive(Clone)]
pub struct PyRecord {
    #[pyo3(get)]
    label: String,

    #[pyo3(get)]
    priority: Priority,
}

#[pymethods]
impl PyRecord {
    #[new]
    fn new(label: String, priority: Priority) -> Self {
        Self { label, priority }
    }

    fn __repr__(&self) -> String {
        format!("Record({:?}, {})", self.label, self.priority)
    }
}

impl From<Record> for PyRecord {
    fn from(record: Record) -> Self {
        Self {
            label: record.label,
            priority: record.priority,
        }
    }
}

impl From<PyRecord> for Record {
    fn from(record: PyRecord) -> Self {
        Record::new(record.label, record.priority)
    }
}

#[pyclass(name = "PriorityQueue")]
pub struct PyPriorityQueue {
    queue: PriorityQueue,
}

#[pymethods]
impl PyPriorityQueue {
    #[new]
    #[pyo3(signature = (initial_capacity=None))]
    fn new(initial_capacity: Option<usize>) -> Self {
        let mut options = HeapOptions::default();
        if let Some(capacity) = initial_capacity {
            options.initial_capacity = capacity;
        }
        Self {
            queue: PriorityQueue::with_options(&options),
        }
    }

    fn enqueue(&mut self, record: PyRecord) {
        self.queue.enqueue(record.into());
    }

    fn dequeue(&mut self) -> PyResult<PyRecord> {
        Ok(self.queue.dequeue()?.into())
    }

    fn peek(&self) -> PyResult<PyRecord> {
        Ok(self.queue.peek()?.clone().into())
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn validate(&self) -> PyResult<()> {
        Ok(self.queue.validate_internal_state()?)
    }

    fn __len__(&self) -> usize {
        self.queue.len()
    }

    fn __repr__(&self) -> String {
        self.queue.debug_dump("PriorityQueue")
    }
}

/// Returns the `k` records with the highest priorities (decreasing order)
#[pyfunction]
#[pyo3(signature = (records, k, use_heap=false))]
fn top_k(records: Vec<PyRecord>, k: usize, use_heap: bool) -> Vec<PyRecord> {
    debug!("Selecting the top {} of {} records", k, records.len());
    let mut source = records.into_iter().map(Record::from);
    let selected = if use_heap {
        select_top_k_heap(&mut source, k)
    } else {
        select_top_k(&mut source, k)
    };
    selected.into_iter().map(PyRecord::from).collect()
}

/// Returns the records sorted by increasing priority
#[pyfunction]
#[pyo3(name = "pq_sort")]
fn py_pq_sort(records: Vec<PyRecord>) -> Vec<PyRecord> {
    let mut records: Vec<Record> = records.into_iter().map(Record::from).collect();
    pq_sort(&mut records);
    records.into_iter().map(PyRecord::from).collect()
}

/// A Python module implemented in Rust.
#[pymodule]
fn heap_select(_py: Python, m: &PyModule) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyRecord>()?;
    m.add_class::<PyPriorityQueue>()?;
    m.add_function(wrap_pyfunction!(top_k, m)?)?;
    m.add_function(wrap_pyfunction!(py_pq_sort, m)?)?;
    Ok(())
}
