//! Literal conversion error types.

use thiserror::Error;

/// Broad class of a conversion failure, used by callers to pick the
/// user-facing error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The literal text breaks the lexical rule of its kind.
    SyntaxViolation,
    /// The literal kind is valid SQL but has no conversion here.
    UnsupportedConstruct,
}

/// Errors that can occur while converting a literal token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("SQL syntax error: {message}")]
    SyntaxViolation { message: String },

    #[error("SQL interface error: {message}")]
    UnsupportedConstruct { message: String },
}

impl ConversionError {
    pub fn syntax(message: impl Into<String>) -> Self {
        ConversionError::SyntaxViolation {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        ConversionError::UnsupportedConstruct {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConversionError::SyntaxViolation { .. } => ErrorCategory::SyntaxViolation,
            ConversionError::UnsupportedConstruct { .. } => ErrorCategory::UnsupportedConstruct,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ConversionError::SyntaxViolation { message }
            | ConversionError::UnsupportedConstruct { message } => message,
        }
    }
}

/// Result type for literal conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::syntax("bit string literal should contain only 0s and 1s");
        assert_eq!(
            err.to_string(),
            "SQL syntax error: bit string literal should contain only 0s and 1s"
        );

        let err = ConversionError::unsupported("NationalStringLiteral(\"x\") is not supported");
        assert_eq!(
            err.to_string(),
            "SQL interface error: NationalStringLiteral(\"x\") is not supported"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(
            ConversionError::syntax("a").category(),
            ErrorCategory::SyntaxViolation
        );
        assert_eq!(
            ConversionError::unsupported("b").category(),
            ErrorCategory::UnsupportedConstruct
        );
        assert_eq!(ConversionError::unsupported("b").message(), "b");
    }
}
