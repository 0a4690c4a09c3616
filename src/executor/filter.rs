//! Filter executor implementation.
//!
//! This executor filters rows from a child executor based on a bound
//! predicate expression. It implements the volcano-style iterator model,
//! producing one row at a time that matches the predicate.

use crate::executor::{ColumnInfo, Executor, Row};
use crate::expression::{evaluate_expression, Expression, TypeChecker};
use crate::value::{DataType, ScalarValue};
use anyhow::{bail, Result};
use log::debug;

/// Executor that filters rows based on an expression
pub struct FilterExecutor {
    /// Child executor that produces rows
    child: Box<dyn Executor>,
    /// Filter expression that evaluates to boolean
    filter_expr: Expression,
    /// Output schema (same as child's schema)
    output_schema: Vec<ColumnInfo>,
    /// Whether the executor has been initialized
    initialized: bool,
}

impl FilterExecutor {
    /// Create a new filter executor
    ///
    /// # Arguments
    /// * `child` - The child executor that produces rows
    /// * `filter_expr` - The filter expression that evaluates to boolean
    pub fn new(child: Box<dyn Executor>, filter_expr: Expression) -> Self {
        Self {
            child,
            filter_expr,
            output_schema: Vec::new(),
            initialized: false,
        }
    }
}

impl Executor for FilterExecutor {
    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        self.child.init()?;
        self.output_schema = self.child.output_schema().to_vec();

        let schema_types: Vec<DataType> =
            self.output_schema.iter().map(|col| col.data_type).collect();
        TypeChecker::new(&schema_types).check_filter_predicate(&self.filter_expr)?;

        debug!("filter predicate type-checked: {:?}", self.filter_expr);
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Row>> {
        if !self.initialized {
            bail!("Executor not initialized. Call init() first.");
        }

        // Keep pulling rows from the child until one matches the predicate
        while let Some(row) = self.child.next()? {
            match evaluate_expression(&self.filter_expr, &row)? {
                ScalarValue::Boolean(true) => return Ok(Some(row)),
                // NULL is treated as false in WHERE clause
                ScalarValue::Boolean(false) | ScalarValue::Null => {}
                other => bail!("Filter expression did not evaluate to boolean: {}", other),
            }
        }
        Ok(None)
    }

    fn output_schema(&self) -> &[ColumnInfo] {
        &self.output_schema
    }
}
