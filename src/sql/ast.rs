// SQL expression syntax tree, before column binding and literal conversion

use crate::literal::LiteralToken;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // Literal exactly as lexed
    Literal(LiteralToken),

    // Column reference
    Column(String),

    // Binary operations
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    // Unary operations
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    // IN expression
    InList {
        expression: Box<Expression>,
        list: Vec<Expression>,
        negated: bool,
    },

    // IS NULL expression
    IsNull {
        expression: Box<Expression>,
        negated: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // Logical
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
        }
    }
}

impl Expression {
    /// Create a literal expression from a token
    pub fn literal(token: LiteralToken) -> Self {
        Expression::Literal(token)
    }

    /// Create a column reference expression
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(name.into())
    }

    /// Create an equality comparison
    pub fn eq(self, other: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(self),
            op: BinaryOperator::Equal,
            right: Box::new(other),
        }
    }

    /// Create a greater than comparison
    pub fn gt(self, other: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(self),
            op: BinaryOperator::Greater,
            right: Box::new(other),
        }
    }

    /// Create an AND expression
    pub fn and(self, other: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(self),
            op: BinaryOperator::And,
            right: Box::new(other),
        }
    }

    /// Create an IN expression
    pub fn in_list(self, list: Vec<Expression>, negated: bool) -> Self {
        Expression::InList {
            expression: Box::new(self),
            list,
            negated,
        }
    }
}
