//! Equality driver — entry points and category dispatch.

use deep_assert_value::ops::{loose_equals, same_value, strict_equals};
use deep_assert_value::{Exotic, ObjectHandle, PropKey, Value};

use crate::cmp::{
    are_equal_array_buffers, are_equal_boxed_primitives, are_equal_dates,
    are_similar_float_arrays, are_similar_regexps, are_similar_typed_arrays,
};
use crate::error::CompareError;
use crate::key_check::{key_check, IterationKind};
use crate::memo::Memo;

/// Loose-mode deep equality: primitive pairs coerce like `==`, collection
/// membership tolerates coercion, prototypes are ignored.
///
/// # Example
///
/// ```
/// use deep_assert_equal::is_deep_equal;
/// use deep_assert_value::Value;
///
/// assert!(is_deep_equal(&Value::int(1), &Value::string("1")).unwrap());
/// ```
pub fn is_deep_equal(a: &Value, b: &Value) -> Result<bool, CompareError> {
    deep_equal(a, b, false)
}

/// Strict-mode deep equality: same tags, same prototypes, `Object.is`-style
/// scalar comparison, symbol-keyed properties included.
///
/// # Example
///
/// ```
/// use deep_assert_equal::is_deep_strict_equal;
/// use deep_assert_value::Value;
///
/// assert!(!is_deep_strict_equal(&Value::int(1), &Value::string("1")).unwrap());
/// let a = Value::object_from([("x", Value::int(1))]);
/// let b = Value::object_from([("x", Value::int(1))]);
/// assert!(is_deep_strict_equal(&a, &b).unwrap());
/// ```
pub fn is_deep_strict_equal(a: &Value, b: &Value) -> Result<bool, CompareError> {
    deep_equal(a, b, true)
}

/// Deep equality with an explicit mode. Allocates a private memo per
/// invocation; the operands are never mutated.
pub fn deep_equal(a: &Value, b: &Value, strict: bool) -> Result<bool, CompareError> {
    let mut memo = Memo::default();
    inner_deep_equal(a, b, strict, &mut memo)
}

pub(crate) fn inner_deep_equal(
    a: &Value,
    b: &Value,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    // `===` fast path. The only pair it cannot settle alone is a zero, where
    // strict mode must still tell `+0` from `-0`.
    if strict_equals(a, b) {
        if !matches!(a, Value::Number(n) if *n == 0.0) {
            return Ok(true);
        }
        return Ok(if strict { same_value(a, b) } else { true });
    }
    if strict {
        let (obj1, obj2) = match (a.as_object(), b.as_object()) {
            (Some(obj1), Some(obj2)) => (obj1, obj2),
            // Unequal primitives can only still match as a NaN pair.
            (None, _) => return Ok(a.is_nan() && b.is_nan()),
            (_, None) => return Ok(false),
        };
        if obj1.proto_id() != obj2.proto_id() {
            return Ok(false);
        }
        compare_objects(obj1, obj2, true, memo)
    } else {
        match (a.as_object(), b.as_object()) {
            (None, None) => Ok(loose_equals(a, b) || (a.is_nan() && b.is_nan())),
            (Some(obj1), Some(obj2)) => compare_objects(obj1, obj2, false, memo),
            _ => Ok(false),
        }
    }
}

fn compare_objects(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    // Tag mismatch is the cheap rejection; it also separates typed-array
    // subtypes and ArrayBuffer from SharedArrayBuffer.
    if obj1.tag() != obj2.tag() {
        return Ok(false);
    }
    let data1 = obj1.data();
    let data2 = obj2.data();
    match (&data1.exotic, &data2.exotic) {
        (Exotic::Array(items1), Exotic::Array(items2)) => {
            if items1.len() != items2.len() {
                return Ok(false);
            }
            let (keys1, keys2) = non_index_keys(obj1, obj2, strict);
            if keys1.len() != keys2.len() {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::Array, Some(keys1))
        }
        (Exotic::Ordinary, Exotic::Ordinary) => {
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::Date(time1), Exotic::Date(time2)) => {
            if !are_equal_dates(*time1, *time2) {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::RegExp(regexp1), Exotic::RegExp(regexp2)) => {
            if !are_similar_regexps(regexp1, regexp2) {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::Error(error1), Exotic::Error(error2)) => {
            if error1.name != error2.name || error1.message != error2.message {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::TypedArray(ta1), Exotic::TypedArray(ta2)) => {
            if !strict && ta1.kind.is_float() {
                if !are_similar_float_arrays(ta1, ta2) {
                    return Ok(false);
                }
            } else if !are_similar_typed_arrays(ta1, ta2) {
                return Ok(false);
            }
            let (keys1, keys2) = non_index_keys(obj1, obj2, strict);
            if keys1.len() != keys2.len() {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, Some(keys1))
        }
        (Exotic::Set(items1), Exotic::Set(items2)) => {
            if items1.len() != items2.len() {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::Set, None)
        }
        (Exotic::Map(entries1), Exotic::Map(entries2)) => {
            if entries1.len() != entries2.len() {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::Map, None)
        }
        (Exotic::ArrayBuffer(buf1), Exotic::ArrayBuffer(buf2)) => {
            if !are_equal_array_buffers(buf1, buf2) {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::Boxed(boxed1), Exotic::Boxed(boxed2)) => {
            if !are_equal_boxed_primitives(boxed1, boxed2)? {
                return Ok(false);
            }
            key_check(obj1, obj2, strict, memo, IterationKind::None, None)
        }
        (Exotic::WeakSet, Exotic::WeakSet) | (Exotic::WeakMap, Exotic::WeakMap) => {
            // Opaque containers: no structural answer exists for distinct
            // instances (identical references were settled in the fast
            // path). Raising is deliberate, not an ordinary inequality.
            Err(CompareError::IncomparableWeakCollection)
        }
        // Tags matched above, so a mixed pairing cannot arise; a category
        // with no counterpart on the other side is unequal.
        _ => Ok(false),
    }
}

/// Own non-index keys of both sides for the precomputed-key paths (arrays
/// and typed arrays); strict mode appends symbol keys so they join the keyed
/// pass and the count parity check.
fn non_index_keys(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
) -> (Vec<PropKey>, Vec<PropKey>) {
    let mut keys1 = obj1.named_keys();
    let mut keys2 = obj2.named_keys();
    if strict {
        keys1.extend(obj1.own_symbol_keys().into_iter().map(PropKey::Symbol));
        keys2.extend(obj2.own_symbol_keys().into_iter().map(PropKey::Symbol));
    }
    (keys1, keys2)
}
