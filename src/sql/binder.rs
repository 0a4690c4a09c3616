//! Binder: resolves column names and converts literals, turning a parsed
//! SQL expression into an evaluable expression.
//!
//! Single literals go through `literal::convert`; `IN` lists go through
//! `literal::convert_list`, which applies the same conversion element by
//! element.

use crate::executor::ColumnInfo;
use crate::expression::{
    BinaryOperator, ExpressionError, ExpressionResult, Expression, UnaryOperator,
};
use crate::literal::{convert, convert_list, ConversionError, LiteralKind, LiteralToken};
use crate::sql::ast;
use crate::value::ScalarValue;
use log::debug;

pub struct Binder<'a> {
    schema: &'a [ColumnInfo],
}

impl<'a> Binder<'a> {
    pub fn new(schema: &'a [ColumnInfo]) -> Self {
        Self { schema }
    }

    /// Bind a parsed expression against the schema
    pub fn bind(&self, expr: &ast::Expression) -> ExpressionResult<Expression> {
        match expr {
            ast::Expression::Literal(token) => Ok(Expression::Literal(convert(token)?)),

            ast::Expression::Column(name) => self.bind_column(name),

            ast::Expression::BinaryOp { left, op, right } => Ok(Expression::binary_op(
                bind_binary_operator(*op),
                self.bind(left)?,
                self.bind(right)?,
            )),

            ast::Expression::UnaryOp { op, operand } => match (op, operand.as_ref()) {
                (ast::UnaryOperator::Not, operand) => {
                    Ok(Expression::not_expr(self.bind(operand)?))
                }
                // Signs directly on a literal fold into the literal itself
                (_, inner) if is_literal(inner) => {
                    Ok(Expression::Literal(convert(&literal_token(expr)?)?))
                }
                (ast::UnaryOperator::Minus, operand) => Ok(Expression::unary_op(
                    UnaryOperator::Minus,
                    self.bind(operand)?,
                )),
                (ast::UnaryOperator::Plus, operand) => Ok(Expression::unary_op(
                    UnaryOperator::Plus,
                    self.bind(operand)?,
                )),
            },

            ast::Expression::InList {
                expression,
                list,
                negated,
            } => {
                let probe = self.bind(expression)?;
                let values = self.bind_list(list)?;
                debug!("bound IN list with {} values", values.len());
                Ok(Expression::in_list(probe, values, *negated))
            }

            ast::Expression::IsNull {
                expression,
                negated,
            } => {
                let operand = self.bind(expression)?;
                Ok(if *negated {
                    Expression::is_not_null(operand)
                } else {
                    Expression::is_null(operand)
                })
            }
        }
    }

    /// Convert a list of literal expressions, e.g. the body of `IN (...)`.
    ///
    /// Every element must be a literal, optionally signed. Elements are
    /// converted in list order and the first failure wins, whether it is a
    /// malformed literal or an element that is not a literal at all.
    pub fn bind_list(&self, list: &[ast::Expression]) -> ExpressionResult<Vec<ScalarValue>> {
        let mut not_literal = None;
        let tokens = list.iter().map_while(|element| match literal_token(element) {
            Ok(token) => Some(token),
            Err(err) => {
                not_literal = Some(err);
                None
            }
        });
        let values = convert_list(tokens)?;
        match not_literal {
            Some(err) => Err(err.into()),
            None => Ok(values),
        }
    }

    fn bind_column(&self, name: &str) -> ExpressionResult<Expression> {
        let index = self
            .schema
            .iter()
            .position(|col| col.name == name)
            .or_else(|| {
                self.schema
                    .iter()
                    .position(|col| col.name.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| ExpressionError::UnknownColumn {
                name: name.to_string(),
            })?;
        Ok(Expression::column_with_name(index, self.schema[index].name.clone()))
    }
}

fn bind_binary_operator(op: ast::BinaryOperator) -> BinaryOperator {
    match op {
        ast::BinaryOperator::Equal => BinaryOperator::Eq,
        ast::BinaryOperator::NotEqual => BinaryOperator::Ne,
        ast::BinaryOperator::Less => BinaryOperator::Lt,
        ast::BinaryOperator::Greater => BinaryOperator::Gt,
        ast::BinaryOperator::LessEqual => BinaryOperator::Le,
        ast::BinaryOperator::GreaterEqual => BinaryOperator::Ge,
        ast::BinaryOperator::And => BinaryOperator::And,
        ast::BinaryOperator::Or => BinaryOperator::Or,
    }
}

/// True for a literal under any number of `+`/`-` signs
fn is_literal(expr: &ast::Expression) -> bool {
    match expr {
        ast::Expression::Literal(_) => true,
        ast::Expression::UnaryOp {
            op: ast::UnaryOperator::Minus | ast::UnaryOperator::Plus,
            operand,
        } => is_literal(operand),
        _ => false,
    }
}

/// Extract the literal token of a list element, folding any signs into a
/// number literal's text.
fn literal_token(expr: &ast::Expression) -> Result<LiteralToken, ConversionError> {
    match expr {
        ast::Expression::Literal(token) => Ok(token.clone()),
        ast::Expression::UnaryOp { op, operand } => {
            let token = literal_token(operand)?;
            match (op, token.kind) {
                (ast::UnaryOperator::Plus, LiteralKind::Number) => Ok(token),
                (ast::UnaryOperator::Minus, LiteralKind::Number) => {
                    let raw = match token.raw.strip_prefix('-') {
                        Some(unsigned) => unsigned.to_string(),
                        None => format!("-{}", token.raw),
                    };
                    Ok(LiteralToken::new(LiteralKind::Number, raw))
                }
                (op, _) => Err(ConversionError::unsupported(format!(
                    "unary operator {} is not supported for {}",
                    op.as_str(),
                    token
                ))),
            }
        }
        other => Err(ConversionError::unsupported(format!(
            "list element must be a literal value; found {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::ErrorCategory;
    use crate::sql::parse_expression;
    use crate::value::DataType;

    fn schema() -> Vec<ColumnInfo> {
        vec![
            ColumnInfo::new("bin", DataType::Binary),
            ColumnInfo::new("val", DataType::Integer),
        ]
    }

    fn bind(sql: &str) -> ExpressionResult<Expression> {
        let schema = schema();
        let parsed = parse_expression(sql).unwrap();
        Binder::new(&schema).bind(&parsed)
    }

    fn conversion_category(err: ExpressionError) -> ErrorCategory {
        match err {
            ExpressionError::Conversion(inner) => inner.category(),
            other => panic!("Expected a conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_comparison() {
        let expr = bind("bin > b'10'").unwrap();
        assert_eq!(
            expr,
            Expression::gt(
                Expression::column_with_name(0, "bin"),
                Expression::literal(ScalarValue::binary(vec![0x02]))
            )
        );
    }

    #[test]
    fn test_bind_in_list() {
        let expr = bind("bin IN (b'0101', x'0b')").unwrap();
        assert_eq!(
            expr,
            Expression::in_list(
                Expression::column_with_name(0, "bin"),
                vec![
                    ScalarValue::binary(vec![0x05]),
                    ScalarValue::binary(vec![0x0B])
                ],
                false
            )
        );
    }

    #[test]
    fn test_bind_signed_numbers() {
        let expr = bind("val IN (-1, +2, - -3)").unwrap();
        match expr {
            Expression::InList { list, .. } => assert_eq!(
                list,
                vec![
                    ScalarValue::Integer(-1),
                    ScalarValue::Integer(2),
                    ScalarValue::Integer(3)
                ]
            ),
            other => panic!("Expected IN list, got {:?}", other),
        }

        let expr = bind("val > -5").unwrap();
        assert_eq!(
            expr,
            Expression::gt(
                Expression::column_with_name(1, "val"),
                Expression::literal(ScalarValue::Integer(-5))
            )
        );
    }

    #[test]
    fn test_bind_sign_on_non_number() {
        let err = bind("bin IN (-x'FF')").unwrap_err();
        assert!(err
            .to_string()
            .contains("unary operator - is not supported for HexStringLiteral(\"FF\")"));
        assert_eq!(conversion_category(err), ErrorCategory::UnsupportedConstruct);
    }

    #[test]
    fn test_bind_malformed_list_element() {
        let err = bind("bin IN (x'FF', x'123')").unwrap_err();
        assert!(err
            .to_string()
            .contains("hex string literal must have an even number of digits"));
        assert_eq!(conversion_category(err), ErrorCategory::SyntaxViolation);
    }

    #[test]
    fn test_bind_list_reports_first_failure_in_order() {
        // malformed literal before a non-literal element
        let err = bind("bin IN (x'123', val)").unwrap_err();
        assert!(err
            .to_string()
            .contains("hex string literal must have an even number of digits"));
        assert_eq!(conversion_category(err), ErrorCategory::SyntaxViolation);

        // malformed literal before a signed hex literal
        let err = bind("bin IN (b'2', -x'FF')").unwrap_err();
        assert!(err
            .to_string()
            .contains("bit string literal should contain only 0s and 1s"));
        assert_eq!(conversion_category(err), ErrorCategory::SyntaxViolation);

        // a valid literal before the non-literal does not mask it
        let err = bind("bin IN (x'FF', val, x'123')").unwrap_err();
        assert_eq!(conversion_category(err), ErrorCategory::UnsupportedConstruct);
    }

    #[test]
    fn test_bind_non_literal_list_element() {
        let err = bind("bin IN (val)").unwrap_err();
        assert_eq!(conversion_category(err), ErrorCategory::UnsupportedConstruct);
    }

    #[test]
    fn test_bind_list() {
        let schema = schema();
        let list = crate::sql::parser::parse_list("b'0101', x'0b', NULL, 'a'").unwrap();
        let values = Binder::new(&schema).bind_list(&list).unwrap();
        assert_eq!(
            values,
            vec![
                ScalarValue::binary(vec![0x05]),
                ScalarValue::binary(vec![0x0B]),
                ScalarValue::Null,
                ScalarValue::text("a"),
            ]
        );
    }

    #[test]
    fn test_bind_national_string() {
        let err = bind("N'hmmm'").unwrap_err();
        assert!(err
            .to_string()
            .contains("NationalStringLiteral(\"hmmm\") is not supported"));
        assert_eq!(conversion_category(err), ErrorCategory::UnsupportedConstruct);
    }

    #[test]
    fn test_bind_unknown_column() {
        assert!(matches!(
            bind("nope = 1"),
            Err(ExpressionError::UnknownColumn { .. })
        ));
        // case-insensitive fallback
        assert!(bind("BIN IS NULL").is_ok());
    }

    #[test]
    fn test_bind_unary_on_column() {
        let expr = bind("-val = 1").unwrap();
        assert!(matches!(
            expr,
            Expression::BinaryOp {
                op: BinaryOperator::Eq,
                ..
            }
        ));
    }
}
