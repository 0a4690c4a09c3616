//! Type checking for bound expressions.

use crate::expression::operator::types_compatible_for_comparison;
use crate::expression::{Expression, ExpressionError, ExpressionResult};
use crate::value::DataType;

/// Type checker for expressions
pub struct TypeChecker<'a> {
    /// Schema defining the types of input columns
    schema: &'a [DataType],
}

impl<'a> TypeChecker<'a> {
    /// Create a new type checker with the given schema
    pub fn new(schema: &'a [DataType]) -> Self {
        Self { schema }
    }

    /// Type check an expression and return its output type
    pub fn check(&self, expr: &Expression) -> ExpressionResult<Option<DataType>> {
        match expr {
            Expression::Literal(value) => Ok(value.data_type()),

            Expression::ColumnRef(col) => {
                if col.index >= self.schema.len() {
                    return Err(ExpressionError::ColumnIndexOutOfBounds {
                        index: col.index,
                        tuple_size: self.schema.len(),
                    });
                }
                Ok(Some(self.schema[col.index]))
            }

            Expression::BinaryOp { op, left, right } => {
                let left_type = self.check(left)?;
                let right_type = self.check(right)?;

                match (left_type, right_type) {
                    (Some(lt), Some(rt)) => match op.output_type(lt, rt) {
                        Some(output_type) => Ok(Some(output_type)),
                        None => Err(ExpressionError::InvalidOperandTypes {
                            operator: op.as_str().to_string(),
                            left_type: Some(lt),
                            right_type: Some(rt),
                        }),
                    },
                    // NULL operands are resolved at runtime
                    _ if op.is_comparison() => Ok(Some(DataType::Boolean)),
                    _ => Ok(None),
                }
            }

            Expression::UnaryOp { op, operand } => match self.check(operand)? {
                Some(ot) => match op.output_type(ot) {
                    Some(output_type) => Ok(Some(output_type)),
                    None => Err(ExpressionError::InvalidOperandTypes {
                        operator: op.as_str().to_string(),
                        left_type: Some(ot),
                        right_type: None,
                    }),
                },
                None => Ok(None),
            },

            Expression::InList { expr, list, .. } => {
                if let Some(probe_type) = self.check(expr)? {
                    for element_type in list.iter().filter_map(|value| value.data_type()) {
                        if !types_compatible_for_comparison(probe_type, element_type) {
                            return Err(ExpressionError::InvalidOperandTypes {
                                operator: "IN".to_string(),
                                left_type: Some(probe_type),
                                right_type: Some(element_type),
                            });
                        }
                    }
                }
                Ok(Some(DataType::Boolean))
            }
        }
    }

    /// Check if an expression is valid for use as a filter predicate
    pub fn check_filter_predicate(&self, expr: &Expression) -> ExpressionResult<()> {
        match self.check(expr)? {
            Some(DataType::Boolean) | None => Ok(()),
            Some(other_type) => Err(ExpressionError::TypeMismatch {
                expected: DataType::Boolean,
                actual: other_type,
                context: "filter predicate".to_string(),
            }),
        }
    }
}

/// Helper function to validate a filter predicate
pub fn validate_filter_predicate(expr: &Expression, schema: &[DataType]) -> ExpressionResult<()> {
    TypeChecker::new(schema).check_filter_predicate(expr)
}
