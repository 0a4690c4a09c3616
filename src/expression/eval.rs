//! Expression evaluation implementation.

use crate::expression::compare::{compare_values, in_list};
use crate::expression::{
    BinaryOperator, ColumnRef, Expression, ExpressionError, ExpressionResult, UnaryOperator,
};
use crate::value::ScalarValue;
use std::cmp::Ordering;

/// Evaluator for expressions
pub struct ExpressionEvaluator<'a> {
    /// The row values to evaluate against
    row: &'a [ScalarValue],
}

impl<'a> ExpressionEvaluator<'a> {
    /// Create a new evaluator over one row
    pub fn new(row: &'a [ScalarValue]) -> Self {
        Self { row }
    }

    /// Evaluate an expression and return the result
    pub fn evaluate(&self, expr: &Expression) -> ExpressionResult<ScalarValue> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),

            Expression::ColumnRef(col) => self.evaluate_column_ref(col),

            Expression::BinaryOp { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.evaluate_binary_op(*op, left_val, right_val)
            }

            Expression::UnaryOp { op, operand } => {
                let operand_val = self.evaluate(operand)?;
                self.evaluate_unary_op(*op, operand_val)
            }

            Expression::InList {
                expr,
                list,
                negated,
            } => {
                let probe = self.evaluate(expr)?;
                Ok(match in_list(&probe, list)? {
                    Some(found) => ScalarValue::Boolean(found != *negated),
                    None => ScalarValue::Null,
                })
            }
        }
    }

    fn evaluate_column_ref(&self, col: &ColumnRef) -> ExpressionResult<ScalarValue> {
        self.row
            .get(col.index)
            .cloned()
            .ok_or(ExpressionError::ColumnIndexOutOfBounds {
                index: col.index,
                tuple_size: self.row.len(),
            })
    }

    fn evaluate_binary_op(
        &self,
        op: BinaryOperator,
        left: ScalarValue,
        right: ScalarValue,
    ) -> ExpressionResult<ScalarValue> {
        match op {
            BinaryOperator::Eq => self.compare(&left, &right, |cmp| cmp == Ordering::Equal),
            BinaryOperator::Ne => self.compare(&left, &right, |cmp| cmp != Ordering::Equal),
            BinaryOperator::Lt => self.compare(&left, &right, |cmp| cmp == Ordering::Less),
            BinaryOperator::Le => self.compare(&left, &right, |cmp| cmp != Ordering::Greater),
            BinaryOperator::Gt => self.compare(&left, &right, |cmp| cmp == Ordering::Greater),
            BinaryOperator::Ge => self.compare(&left, &right, |cmp| cmp != Ordering::Less),

            // Three-valued logic: a definite FALSE (AND) or TRUE (OR) wins over NULL
            BinaryOperator::And => match (&left, &right) {
                (ScalarValue::Boolean(false), _) | (_, ScalarValue::Boolean(false)) => {
                    Ok(ScalarValue::Boolean(false))
                }
                (ScalarValue::Boolean(true), ScalarValue::Boolean(true)) => {
                    Ok(ScalarValue::Boolean(true))
                }
                (
                    ScalarValue::Null | ScalarValue::Boolean(_),
                    ScalarValue::Null | ScalarValue::Boolean(_),
                ) => Ok(ScalarValue::Null),
                _ => Err(self.invalid_operands(op, &left, &right)),
            },

            BinaryOperator::Or => match (&left, &right) {
                (ScalarValue::Boolean(true), _) | (_, ScalarValue::Boolean(true)) => {
                    Ok(ScalarValue::Boolean(true))
                }
                (ScalarValue::Boolean(false), ScalarValue::Boolean(false)) => {
                    Ok(ScalarValue::Boolean(false))
                }
                (
                    ScalarValue::Null | ScalarValue::Boolean(_),
                    ScalarValue::Null | ScalarValue::Boolean(_),
                ) => Ok(ScalarValue::Null),
                _ => Err(self.invalid_operands(op, &left, &right)),
            },
        }
    }

    fn evaluate_unary_op(
        &self,
        op: UnaryOperator,
        operand: ScalarValue,
    ) -> ExpressionResult<ScalarValue> {
        match (op, operand) {
            (UnaryOperator::IsNull, value) => Ok(ScalarValue::Boolean(value.is_null())),
            (UnaryOperator::IsNotNull, value) => Ok(ScalarValue::Boolean(!value.is_null())),
            (_, ScalarValue::Null) => Ok(ScalarValue::Null),
            (UnaryOperator::Not, ScalarValue::Boolean(b)) => Ok(ScalarValue::Boolean(!b)),
            (UnaryOperator::Plus, value @ (ScalarValue::Integer(_) | ScalarValue::Float(_))) => {
                Ok(value)
            }
            (UnaryOperator::Minus, ScalarValue::Integer(n)) => n
                .checked_neg()
                .map(ScalarValue::Integer)
                .ok_or_else(|| ExpressionError::EvaluationError {
                    message: format!("integer overflow negating {}", n),
                }),
            (UnaryOperator::Minus, ScalarValue::Float(x)) => Ok(ScalarValue::Float(-x)),
            (op, value) => Err(ExpressionError::InvalidOperandTypes {
                operator: op.as_str().to_string(),
                left_type: value.data_type(),
                right_type: None,
            }),
        }
    }

    /// Compare two values and apply a comparison function
    fn compare<F>(
        &self,
        left: &ScalarValue,
        right: &ScalarValue,
        cmp_fn: F,
    ) -> ExpressionResult<ScalarValue>
    where
        F: FnOnce(Ordering) -> bool,
    {
        Ok(match compare_values(left, right)? {
            Some(ordering) => ScalarValue::Boolean(cmp_fn(ordering)),
            None => ScalarValue::Null,
        })
    }

    fn invalid_operands(
        &self,
        op: BinaryOperator,
        left: &ScalarValue,
        right: &ScalarValue,
    ) -> ExpressionError {
        ExpressionError::InvalidOperandTypes {
            operator: op.as_str().to_string(),
            left_type: left.data_type(),
            right_type: right.data_type(),
        }
    }
}

/// Helper function to evaluate an expression against one row
pub fn evaluate_expression(expr: &Expression, row: &[ScalarValue]) -> ExpressionResult<ScalarValue> {
    ExpressionEvaluator::new(row).evaluate(expr)
}
