//! Literal converter: maps each literal token kind to a scalar value.
//!
//! `convert` is the single source of truth for literal semantics.
//! `convert_list` is the list form used wherever the grammar admits a
//! comma-separated run of literals (membership lists in particular).

use crate::literal::{
    pack_bits, pack_hex, validate_bits, validate_hex, ConversionError, ConversionResult,
    LiteralKind, LiteralToken,
};
use crate::value::ScalarValue;
use std::borrow::Borrow;

/// Convert a single literal token into a scalar value.
pub fn convert(token: &LiteralToken) -> ConversionResult<ScalarValue> {
    match token.kind {
        LiteralKind::BitString => {
            let digits = validate_bits(&token.raw)?;
            Ok(ScalarValue::Binary(pack_bits(digits)))
        }
        LiteralKind::HexString => {
            let digits = validate_hex(&token.raw)?;
            Ok(ScalarValue::Binary(pack_hex(digits)))
        }
        LiteralKind::QuotedString | LiteralKind::DollarQuotedString => {
            Ok(ScalarValue::Utf8Text(token.raw.clone()))
        }
        LiteralKind::Number => convert_number(&token.raw),
        LiteralKind::Boolean => convert_boolean(&token.raw),
        LiteralKind::Null => Ok(ScalarValue::Null),
        LiteralKind::NationalString => Err(not_supported(token)),
        LiteralKind::EscapedString => Err(not_supported(token)),
    }
}

/// Convert an ordered run of literal tokens.
///
/// Elements are converted in order and the first failure is returned as
/// is; no partially converted list is ever produced. Elements may convert
/// to different value kinds.
pub fn convert_list<I>(tokens: I) -> ConversionResult<Vec<ScalarValue>>
where
    I: IntoIterator,
    I::Item: Borrow<LiteralToken>,
{
    tokens
        .into_iter()
        .map(|token| convert(token.borrow()))
        .collect()
}

fn not_supported(token: &LiteralToken) -> ConversionError {
    ConversionError::unsupported(format!("{} is not supported", token))
}

fn convert_number(raw: &str) -> ConversionResult<ScalarValue> {
    let parsed = if raw.contains(['.', 'e', 'E']) {
        raw.parse::<f64>().map(ScalarValue::Float).ok()
    } else {
        raw.parse::<i64>().map(ScalarValue::Integer).ok()
    };
    parsed.ok_or_else(|| ConversionError::unsupported(format!("cannot parse literal: {:?}", raw)))
}

fn convert_boolean(raw: &str) -> ConversionResult<ScalarValue> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(ScalarValue::Boolean(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(ScalarValue::Boolean(false))
    } else {
        Err(ConversionError::syntax(format!(
            "boolean literal must be TRUE or FALSE; found '{}'",
            raw
        )))
    }
}
