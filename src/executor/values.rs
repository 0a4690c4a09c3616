//! Values executor: produces a fixed set of in-memory rows.

use crate::executor::{ColumnInfo, Executor, Row};
use crate::value::ScalarValue;
use anyhow::{bail, Result};
use log::debug;

/// Executor that yields rows held in memory, checked against its schema
pub struct ValuesExecutor {
    schema: Vec<ColumnInfo>,
    rows: Vec<Row>,
    current: usize,
    initialized: bool,
}

impl ValuesExecutor {
    pub fn new(schema: Vec<ColumnInfo>, rows: Vec<Row>) -> Self {
        Self {
            schema,
            rows,
            current: 0,
            initialized: false,
        }
    }

    /// Build a source from named columns of equal length
    pub fn from_columns(columns: Vec<(ColumnInfo, Vec<ScalarValue>)>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, |(_, values)| values.len());
        if let Some((col, values)) = columns.iter().find(|(_, values)| values.len() != n_rows) {
            bail!(
                "Column {} has {} values, expected {}",
                col.name,
                values.len(),
                n_rows
            );
        }

        let mut rows = vec![Vec::with_capacity(columns.len()); n_rows];
        let mut schema = Vec::with_capacity(columns.len());
        for (col, values) in columns {
            for (row, value) in rows.iter_mut().zip(values) {
                row.push(value);
            }
            schema.push(col);
        }
        Ok(Self::new(schema, rows))
    }
}

impl Executor for ValuesExecutor {
    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        for (row_idx, row) in self.rows.iter().enumerate() {
            if row.len() != self.schema.len() {
                bail!(
                    "Row {} has {} values but schema has {} columns",
                    row_idx,
                    row.len(),
                    self.schema.len()
                );
            }
            for (value, col) in row.iter().zip(&self.schema) {
                if !value.is_compatible_with(col.data_type) {
                    bail!(
                        "Value {} in row {} is not compatible with column {} of type {}",
                        value,
                        row_idx,
                        col.name,
                        col.data_type
                    );
                }
            }
        }

        debug!(
            "values executor ready: {} rows, {} columns",
            self.rows.len(),
            self.schema.len()
        );
        self.current = 0;
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Row>> {
        if !self.initialized {
            bail!("Executor not initialized. Call init() first.");
        }

        let row = self.rows.get(self.current).cloned();
        if row.is_some() {
            self.current += 1;
        }
        Ok(row)
    }

    fn output_schema(&self) -> &[ColumnInfo] {
        &self.schema
    }
}
