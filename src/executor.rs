//! Executor layer for filter evaluation over in-memory rows.
//!
//! This module implements the Volcano-style iterator model. Each executor
//! produces rows one at a time via `next()`, so executors compose by
//! wrapping a child.

use crate::value::{DataType, ScalarValue};
use anyhow::Result;

pub mod filter;
pub mod values;

pub use filter::FilterExecutor;
pub use values::ValuesExecutor;

/// One row of column values
pub type Row = Vec<ScalarValue>;

/// Trait for all executors
pub trait Executor: Send {
    /// Initialize the executor. This must be called before `next()`.
    fn init(&mut self) -> Result<()>;

    /// Get the next row from the executor.
    /// Returns None when there are no more rows.
    fn next(&mut self) -> Result<Option<Row>>;

    /// Get the output schema of this executor
    fn output_schema(&self) -> &[ColumnInfo];
}

/// Information about a column in the output schema
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: DataType,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Initialize an executor and drain every row it produces
pub fn collect_rows(executor: &mut dyn Executor) -> Result<Vec<Row>> {
    executor.init()?;
    let mut rows = Vec::new();
    while let Some(row) = executor.next()? {
        rows.push(row);
    }
    Ok(rows)
}
