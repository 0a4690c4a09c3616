// SQL module - expression parsing, literal tokens and binding

pub mod ast;
pub mod binder;
pub mod lexer;
pub mod parser;
pub mod token;

pub use binder::Binder;
pub use lexer::Lexer;
pub use parser::{parse_expression, parse_list, Parser};
pub use token::Token;

use crate::executor::ColumnInfo;
use crate::expression::{Expression, ExpressionError};
use crate::literal::ConversionError;
use anyhow::Result;

/// Parse a SQL expression and bind it against a schema
pub fn sql_expr(sql: &str, schema: &[ColumnInfo]) -> Result<Expression> {
    let parsed = parse_expression(sql)?;
    Ok(Binder::new(schema).bind(&parsed)?)
}

/// Find the literal conversion failure behind an error, if there is one
pub fn conversion_error(err: &anyhow::Error) -> Option<&ConversionError> {
    err.chain().find_map(|cause| {
        if let Some(ExpressionError::Conversion(inner)) = cause.downcast_ref::<ExpressionError>() {
            return Some(inner);
        }
        cause.downcast_ref::<ConversionError>()
    })
}
