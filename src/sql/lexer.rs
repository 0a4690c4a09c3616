// SQL lexer - tokenizes SQL expressions

use super::token::Token;
use anyhow::{bail, Result};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        let token = match ch {
            '+' => {
                self.advance();
                Token::Plus
            }
            '-' => {
                self.advance();
                // Check for comments
                if self.current_char() == Some('-') {
                    self.skip_comment();
                    return self.next_token();
                }
                Token::Minus
            }
            '=' => {
                self.advance();
                Token::Equal
            }
            '<' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Token::LessEqual
                } else if self.current_char() == Some('>') {
                    self.advance();
                    Token::NotEqual
                } else {
                    Token::Less
                }
            }
            '>' => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    Token::GreaterEqual
                } else {
                    Token::Greater
                }
            }
            '!' => {
                self.advance();
                if self.current_char() != Some('=') {
                    bail!("Unexpected character '!' at position {}", self.position - 1);
                }
                self.advance();
                Token::NotEqual
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            ',' => {
                self.advance();
                Token::Comma
            }
            '\'' => Token::String(self.read_string()?),
            '"' => self.read_quoted_identifier()?,
            '$' => Token::DollarString(self.read_dollar_string()?),
            c if self.peek() == Some('\'') && "bBxXnNeE".contains(c) => {
                self.advance();
                let content = self.read_string()?;
                match c.to_ascii_uppercase() {
                    'B' => Token::BitString(content),
                    'X' => Token::HexString(content),
                    'N' => Token::NationalString(content),
                    _ => Token::EscapedString(content),
                }
            }
            c if c.is_alphabetic() || c == '_' => self.read_identifier(),
            c if c.is_ascii_digit() => self.read_number(),
            c => bail!("Unexpected character '{}' at position {}", c, self.position),
        };

        Ok(token)
    }

    /// Advance to the next character
    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    /// Peek at the next character without advancing
    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skip single-line comments starting with --
    fn skip_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::keyword_from_str(&identifier).unwrap_or(Token::Identifier(identifier))
    }

    /// Read a quoted identifier (e.g., "column name")
    fn read_quoted_identifier(&mut self) -> Result<Token> {
        let start = self.position;
        self.advance(); // Skip opening quote
        let mut identifier = String::new();

        loop {
            match self.current_char() {
                Some('"') if self.peek() == Some('"') => {
                    identifier.push('"');
                    self.advance();
                    self.advance();
                }
                Some('"') => {
                    self.advance();
                    return Ok(Token::Identifier(identifier));
                }
                Some(ch) => {
                    identifier.push(ch);
                    self.advance();
                }
                None => bail!("Unterminated quoted identifier starting at position {}", start),
            }
        }
    }

    /// Read the body of a single-quoted literal; `''` is an escaped quote
    fn read_string(&mut self) -> Result<String> {
        let start = self.position;
        self.advance(); // Skip opening quote
        let mut string = String::new();

        loop {
            match self.current_char() {
                Some('\'') if self.peek() == Some('\'') => {
                    string.push('\'');
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance();
                    return Ok(string);
                }
                Some(ch) => {
                    string.push(ch);
                    self.advance();
                }
                None => bail!("Unterminated string literal starting at position {}", start),
            }
        }
    }

    /// Read a dollar-quoted string: `$$body$$` or `$tag$body$tag$`
    fn read_dollar_string(&mut self) -> Result<String> {
        let start = self.position;
        self.advance(); // Skip opening $

        let mut tag = String::new();
        loop {
            match self.current_char() {
                Some('$') => {
                    self.advance();
                    break;
                }
                Some(ch) if ch.is_alphanumeric() || ch == '_' => {
                    tag.push(ch);
                    self.advance();
                }
                _ => bail!("Invalid dollar-quote tag at position {}", start),
            }
        }

        let delimiter: Vec<char> = format!("${}$", tag).chars().collect();
        let mut body = String::new();
        while self.position < self.input.len() {
            if self.input[self.position..].starts_with(&delimiter) {
                self.position += delimiter.len();
                return Ok(body);
            }
            body.push(self.input[self.position]);
            self.advance();
        }
        bail!("Unterminated dollar-quoted string starting at position {}", start)
    }

    /// Read a number (integer, decimal or with exponent)
    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !has_dot && self.peek().is_some_and(|c| c.is_ascii_digit()) {
                has_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Optional exponent: e10, E-3, e+2
        if let Some(e @ ('e' | 'E')) = self.current_char() {
            let sign = self.peek().filter(|c| *c == '+' || *c == '-');
            let digit_at = self.position + 1 + usize::from(sign.is_some());
            if self.input.get(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                number.push(e);
                self.advance();
                if let Some(sign) = sign {
                    number.push(sign);
                    self.advance();
                }
                while let Some(ch) = self.current_char().filter(|c| c.is_ascii_digit()) {
                    number.push(ch);
                    self.advance();
                }
            }
        }

        Token::Number(number)
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            if token == Token::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }

        Ok(tokens)
    }
}
