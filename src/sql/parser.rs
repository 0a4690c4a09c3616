// SQL parser - converts tokens to an expression AST

use super::ast::*;
use super::lexer::Lexer;
use super::token::Token;
use crate::literal::{LiteralKind, LiteralToken};
use anyhow::{bail, Result};

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(sql: &str) -> Result<Self> {
        let tokens = Lexer::new(sql).tokenize()?;
        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse a complete expression; trailing tokens are an error
    pub fn parse(&mut self) -> Result<Expression> {
        let expr = self.parse_expression()?;
        if !self.match_token(&Token::Eof) {
            bail!("Unexpected token after expression: {:?}", self.current_token());
        }
        Ok(expr)
    }

    /// Parse a comma-separated list of expressions up to the end of input
    pub fn parse_list(&mut self) -> Result<Vec<Expression>> {
        let list = self.parse_expression_list()?;
        if !self.match_token(&Token::Eof) {
            bail!("Unexpected token after list: {:?}", self.current_token());
        }
        Ok(list)
    }

    /// Parse expression
    pub fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_or()
    }

    /// Parse OR expression
    fn parse_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_and()?;

        while self.match_token(&Token::Or) {
            self.advance();
            let right = self.parse_and()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Or,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse AND expression
    fn parse_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_not()?;

        while self.match_token(&Token::And) {
            self.advance();
            let right = self.parse_not()?;
            left = Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::And,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse NOT expression
    fn parse_not(&mut self) -> Result<Expression> {
        if self.match_token(&Token::Not) {
            self.advance();
            let operand = self.parse_not()?;
            Ok(Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
            })
        } else {
            self.parse_comparison()
        }
    }

    /// Parse comparison expression
    fn parse_comparison(&mut self) -> Result<Expression> {
        let left = self.parse_unary()?;

        if self.match_token(&Token::Is) {
            self.advance();
            let negated = if self.match_token(&Token::Not) {
                self.advance();
                true
            } else {
                false
            };
            self.expect_token(Token::Null)?;
            return Ok(Expression::IsNull {
                expression: Box::new(left),
                negated,
            });
        }

        let negated = self.match_token(&Token::Not) && self.peek_token() == Token::In;
        if negated {
            self.advance();
        }
        if self.match_token(&Token::In) {
            self.advance();
            self.expect_token(Token::LeftParen)?;
            let list = self.parse_expression_list()?;
            self.expect_token(Token::RightParen)?;
            return Ok(Expression::InList {
                expression: Box::new(left),
                list,
                negated,
            });
        }

        let op = match self.current_token() {
            Token::Equal => BinaryOperator::Equal,
            Token::NotEqual => BinaryOperator::NotEqual,
            Token::Less => BinaryOperator::Less,
            Token::Greater => BinaryOperator::Greater,
            Token::LessEqual => BinaryOperator::LessEqual,
            Token::GreaterEqual => BinaryOperator::GreaterEqual,
            _ => return Ok(left),
        };
        self.advance();

        let right = self.parse_unary()?;
        Ok(Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Parse unary expression
    fn parse_unary(&mut self) -> Result<Expression> {
        let op = match self.current_token() {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };
        self.advance();

        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// Parse primary expression
    fn parse_primary(&mut self) -> Result<Expression> {
        let literal = |kind: LiteralKind, raw: String| -> Result<Expression> {
            Ok(Expression::Literal(LiteralToken::new(kind, raw)))
        };

        let token = self.current_token();
        self.advance();
        match token {
            Token::Number(n) => literal(LiteralKind::Number, n),
            Token::String(s) => literal(LiteralKind::QuotedString, s),
            Token::BitString(s) => literal(LiteralKind::BitString, s),
            Token::HexString(s) => literal(LiteralKind::HexString, s),
            Token::NationalString(s) => literal(LiteralKind::NationalString, s),
            Token::EscapedString(s) => literal(LiteralKind::EscapedString, s),
            Token::DollarString(s) => literal(LiteralKind::DollarQuotedString, s),
            Token::True => literal(LiteralKind::Boolean, "true".to_string()),
            Token::False => literal(LiteralKind::Boolean, "false".to_string()),
            Token::Null => literal(LiteralKind::Null, "NULL".to_string()),
            Token::Identifier(name) => Ok(Expression::Column(name)),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                self.expect_token(Token::RightParen)?;
                Ok(expr)
            }
            other => bail!("Unexpected token: {:?}", other),
        }
    }

    /// Parse list of expressions
    fn parse_expression_list(&mut self) -> Result<Vec<Expression>> {
        let mut expressions = vec![];

        loop {
            expressions.push(self.parse_expression()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
            self.advance();
        }

        Ok(expressions)
    }

    // Helper methods

    /// Get current token
    fn current_token(&self) -> Token {
        self.tokens
            .get(self.position)
            .cloned()
            .unwrap_or(Token::Eof)
    }

    /// Get the token after the current one
    fn peek_token(&self) -> Token {
        self.tokens
            .get(self.position + 1)
            .cloned()
            .unwrap_or(Token::Eof)
    }

    /// Advance to next token
    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Check if current token matches
    fn match_token(&self, token: &Token) -> bool {
        self.current_token() == *token
    }

    /// Expect a specific token
    fn expect_token(&mut self, token: Token) -> Result<()> {
        if self.current_token() == token {
            self.advance();
            Ok(())
        } else {
            bail!("Expected {:?}, found {:?}", token, self.current_token())
        }
    }
}

/// Parse a standalone SQL expression
pub fn parse_expression(sql: &str) -> Result<Expression> {
    Parser::new(sql)?.parse()
}

/// Parse a comma-separated list of SQL expressions
pub fn parse_list(sql: &str) -> Result<Vec<Expression>> {
    Parser::new(sql)?.parse_list()
}
