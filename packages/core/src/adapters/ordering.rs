//! Natural ordering of extracted values
//!
//! Null sorts before every other value. Integers and floats compare
//! numerically with each other, strings lexicographically, booleans with
//! `false` first, and objects through their [`Subject::sort_key`]. Any other
//! pairing has no natural order.
//!
//! [`Subject::sort_key`]: crate::subject::Subject::sort_key

use std::cmp::Ordering;

use crate::error::{LambdaError, LambdaResult};
use crate::model::Value;

// Bound on nested sort keys, so a key that refers back to its owner terminates
const MAX_SORT_KEY_DEPTH: usize = 8;

/// Compare two values under natural ordering
///
/// # Errors
///
/// Returns `NotComparable` for mixed kinds, NaN, or objects without a sort key.
pub fn natural_order(left: &Value, right: &Value) -> LambdaResult<Ordering> {
    compare_at_depth(left, right, 0)
}

/// Order nulls first, deferring every non-null pair to `order`
pub fn nulls_first<F>(left: &Value, right: &Value, order: F) -> LambdaResult<Ordering>
where
    F: FnOnce(&Value, &Value) -> LambdaResult<Ordering>,
{
    match (left.is_null(), right.is_null()) {
        (true, true) => Ok(Ordering::Equal),
        (true, false) => Ok(Ordering::Less),
        (false, true) => Ok(Ordering::Greater),
        (false, false) => order(left, right),
    }
}

fn compare_at_depth(left: &Value, right: &Value, depth: usize) -> LambdaResult<Ordering> {
    nulls_first(left, right, |left, right| match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).ok_or_else(|| not_comparable(left, right)),
        (Value::Int(a), Value::Float(b)) => int_float_order(*a, *b).ok_or_else(|| not_comparable(left, right)),
        (Value::Float(a), Value::Int(b)) => int_float_order(*b, *a)
            .map(Ordering::reverse)
            .ok_or_else(|| not_comparable(left, right)),
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Object(a), Value::Object(b)) if depth < MAX_SORT_KEY_DEPTH => {
            match (a.sort_key(), b.sort_key()) {
                (Some(a), Some(b)) => compare_at_depth(&a, &b, depth + 1),
                _ => Err(not_comparable(left, right)),
            }
        }
        _ => Err(not_comparable(left, right)),
    })
}

// -2^63 and 2^63, both exact in f64
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float; `None` for NaN
///
/// Compares the integer with the float's whole part, then lets the
/// fractional part break a tie, so no integer is rounded to a float.
fn int_float_order(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_END_F64 {
        return Some(Ordering::Less);
    }
    if float < I64_MIN_F64 {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i64;
    Some(int.cmp(&whole_int).then_with(|| {
        let fraction = float - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

fn not_comparable(left: &Value, right: &Value) -> LambdaError {
    LambdaError::not_comparable(left.type_name(), right.type_name())
}
