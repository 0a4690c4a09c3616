//! Comparison and coercion rules between scalar values.
//!
//! Every ordering, equality and membership decision made by the evaluator
//! goes through this module:
//!
//! - `Binary` against `Binary` is unsigned byte-wise lexicographic order,
//!   a strict prefix sorting first.
//! - `Utf8Text` against `Binary` (either side) compares the text's UTF-8
//!   bytes with the same byte-wise order.
//! - Matching variants compare naturally. Floats order numerically with
//!   `0.0 = -0.0`; NaN equals NaN and sorts above every other float.
//! - Any other pairing is an error, never a silent coercion.
//! - `NULL` on either side yields an unknown (`None`) result.

use crate::expression::{ExpressionError, ExpressionResult};
use crate::value::ScalarValue;
use std::cmp::Ordering;

/// Order two values. Returns `None` when either side is NULL.
pub fn compare_values(
    left: &ScalarValue,
    right: &ScalarValue,
) -> ExpressionResult<Option<Ordering>> {
    let ordering = match (left, right) {
        (ScalarValue::Null, _) | (_, ScalarValue::Null) => return Ok(None),
        (ScalarValue::Boolean(a), ScalarValue::Boolean(b)) => a.cmp(b),
        (ScalarValue::Integer(a), ScalarValue::Integer(b)) => a.cmp(b),
        (ScalarValue::Float(a), ScalarValue::Float(b)) => compare_floats(*a, *b),
        (
            ScalarValue::Utf8Text(_) | ScalarValue::Binary(_),
            ScalarValue::Utf8Text(_) | ScalarValue::Binary(_),
        ) => compare_bytes(left, right)?,
        _ => {
            return Err(ExpressionError::InvalidOperandTypes {
                operator: "comparison".to_string(),
                left_type: left.data_type(),
                right_type: right.data_type(),
            })
        }
    };
    Ok(Some(ordering))
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// SQL `=`. Returns `None` when either side is NULL.
pub fn values_equal(left: &ScalarValue, right: &ScalarValue) -> ExpressionResult<Option<bool>> {
    Ok(compare_values(left, right)?.map(|ordering| ordering == Ordering::Equal))
}

/// SQL `probe IN (list)` with three-valued logic.
///
/// A match anywhere in the list is TRUE. Without a match, a NULL probe or a
/// NULL element makes the result unknown, otherwise it is FALSE.
pub fn in_list(probe: &ScalarValue, list: &[ScalarValue]) -> ExpressionResult<Option<bool>> {
    if probe.is_null() {
        return Ok(None);
    }

    let mut saw_null = false;
    for element in list {
        match values_equal(probe, element)? {
            Some(true) => return Ok(Some(true)),
            Some(false) => {}
            None => saw_null = true,
        }
    }

    Ok(if saw_null { None } else { Some(false) })
}

fn compare_bytes(left: &ScalarValue, right: &ScalarValue) -> ExpressionResult<Ordering> {
    match (left.as_bytes(), right.as_bytes()) {
        (Some(a), Some(b)) => Ok(a.cmp(b)),
        _ => Err(ExpressionError::InvalidOperandTypes {
            operator: "comparison".to_string(),
            left_type: left.data_type(),
            right_type: right.data_type(),
        }),
    }
}
