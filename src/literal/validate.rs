//! Lexical validation for bit-string and hex-string digits.
//!
//! Validation only checks character-set and length preconditions; byte
//! construction is left to `literal::pack`.

use crate::literal::{ConversionError, ConversionResult};

/// Check that every character of a bit string is `0` or `1`.
///
/// The empty string is a valid bit string with zero digits.
pub fn validate_bits(raw: &str) -> ConversionResult<&str> {
    if raw.bytes().all(|b| b == b'0' || b == b'1') {
        Ok(raw)
    } else {
        Err(ConversionError::syntax(format!(
            "bit string literal should contain only 0s and 1s; found '{}'",
            raw
        )))
    }
}

/// Check that a hex string has an even number of hexadecimal digits.
///
/// Parity is checked before the character set, so an odd-length string is
/// always reported as an odd-length string.
pub fn validate_hex(raw: &str) -> ConversionResult<&str> {
    if raw.chars().count() % 2 != 0 {
        return Err(ConversionError::syntax(format!(
            "hex string literal must have an even number of digits; found '{}'",
            raw
        )));
    }
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConversionError::syntax(format!(
            "hex string literal should contain only hexadecimal digits; found '{}'",
            raw
        )));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::ErrorCategory;

    #[test]
    fn test_validate_bits() {
        assert_eq!(validate_bits("").unwrap(), "");
        assert_eq!(validate_bits("0").unwrap(), "0");
        assert_eq!(validate_bits("1001").unwrap(), "1001");

        let err = validate_bits("007").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::SyntaxViolation);
        assert!(err
            .message()
            .contains("bit string literal should contain only 0s and 1s"));

        assert!(validate_bits("10 1").is_err());
        assert!(validate_bits("1é").is_err());
    }

    #[test]
    fn test_validate_hex() {
        assert_eq!(validate_hex("").unwrap(), "");
        assert_eq!(validate_hex("FF").unwrap(), "FF");
        assert_eq!(validate_hex("DeadBeef").unwrap(), "DeadBeef");

        let err = validate_hex("00F").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::SyntaxViolation);
        assert!(err
            .message()
            .contains("hex string literal must have an even number of digits"));

        let err = validate_hex("0G").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::SyntaxViolation);
        assert!(err.message().contains("only hexadecimal digits"));
    }

    #[test]
    fn test_validate_hex_checks_parity_first() {
        // odd length and a bad character: parity wins
        let err = validate_hex("0GZ").unwrap_err();
        assert!(err.message().contains("even number of digits"));

        // a multi-byte character counts as one digit
        let err = validate_hex("0é").unwrap_err();
        assert!(err.message().contains("only hexadecimal digits"));
    }
}
