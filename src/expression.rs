//! Expression evaluation framework for filter predicates.
//!
//! This module provides:
//! - Bound expression trees with literals already converted
//! - Type checking and validation
//! - Comparison and coercion rules between scalar values
//! - Expression evaluation against rows

pub mod compare;
pub mod error;
pub mod eval;
pub mod expr;
pub mod operator;
pub mod type_checker;

pub use compare::{compare_values, in_list, values_equal};
pub use error::{ExpressionError, ExpressionResult};
pub use eval::{evaluate_expression, ExpressionEvaluator};
pub use expr::{ColumnRef, Expression};
pub use operator::{BinaryOperator, UnaryOperator};
pub use type_checker::{validate_filter_predicate, TypeChecker};
