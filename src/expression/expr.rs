//! Bound expression definitions.

use crate::expression::operator::{BinaryOperator, UnaryOperator};
use crate::value::{DataType, ScalarValue};

/// Column reference in an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Column index in the row (0-based)
    pub index: usize,
    /// Optional column name for debugging/display
    pub name: Option<String>,
}

impl ColumnRef {
    pub fn new(index: usize) -> Self {
        Self { index, name: None }
    }

    pub fn with_name(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: Some(name.into()),
        }
    }
}

/// Expression tree node with columns resolved and literals converted
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Converted literal
    Literal(ScalarValue),

    /// Column reference
    ColumnRef(ColumnRef),

    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// Membership test against a list of converted literals
    InList {
        expr: Box<Expression>,
        list: Vec<ScalarValue>,
        negated: bool,
    },
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: ScalarValue) -> Self {
        Expression::Literal(value)
    }

    /// Create a column reference expression
    pub fn column(index: usize) -> Self {
        Expression::ColumnRef(ColumnRef::new(index))
    }

    /// Create a column reference with name
    pub fn column_with_name(index: usize, name: impl Into<String>) -> Self {
        Expression::ColumnRef(ColumnRef::with_name(index, name))
    }

    pub fn binary_op(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary_op(op: UnaryOperator, operand: Expression) -> Self {
        Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn in_list(expr: Expression, list: Vec<ScalarValue>, negated: bool) -> Self {
        Expression::InList {
            expr: Box::new(expr),
            list,
            negated,
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Or, left, right)
    }

    pub fn not_expr(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::Not, operand)
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Eq, left, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Ne, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Lt, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Le, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Gt, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Ge, left, right)
    }

    pub fn is_null(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::IsNull, operand)
    }

    pub fn is_not_null(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::IsNotNull, operand)
    }

    /// Check if this expression is a constant (contains no column references)
    pub fn is_constant(&self) -> bool {
        match self {
            Expression::Literal(_) => true,
            Expression::ColumnRef(_) => false,
            Expression::BinaryOp { left, right, .. } => left.is_constant() && right.is_constant(),
            Expression::UnaryOp { operand, .. } => operand.is_constant(),
            Expression::InList { expr, .. } => expr.is_constant(),
        }
    }

    /// Get the expected output type of this expression (if it can be determined statically)
    pub fn output_type(&self, input_schema: &[DataType]) -> Option<DataType> {
        match self {
            Expression::Literal(value) => value.data_type(),
            Expression::ColumnRef(col) => input_schema.get(col.index).copied(),
            Expression::BinaryOp { op, left, right } => {
                let left_type = left.output_type(input_schema)?;
                let right_type = right.output_type(input_schema)?;
                op.output_type(left_type, right_type)
            }
            Expression::UnaryOp { op, operand } => {
                let operand_type = operand.output_type(input_schema)?;
                op.output_type(operand_type)
            }
            Expression::InList { .. } => Some(DataType::Boolean),
        }
    }
}
