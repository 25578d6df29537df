//! Leaf comparators for the non-recursive value categories.

use deep_assert_buffers::cmp_bytes;
use deep_assert_value::ops::number_same_value;
use deep_assert_value::{
    ArrayBufferData, BoxedPrimitive, RegExpData, TypedArrayData, TypedArrayKind,
};

use crate::error::CompareError;

/// Compares two Date timestamps. Two invalid dates (both `NaN`) are equal.
///
/// # Example
///
/// ```
/// use deep_assert_equal::are_equal_dates;
///
/// assert!(are_equal_dates(86_400_000.0, 86_400_000.0));
/// assert!(are_equal_dates(f64::NAN, f64::NAN));
/// assert!(!are_equal_dates(f64::NAN, 0.0));
/// ```
pub fn are_equal_dates(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/// Compares two regular expressions by `source`, `flags` and `last_index`.
/// `last_index` is observable matcher state, not incidental.
pub fn are_similar_regexps(a: &RegExpData, b: &RegExpData) -> bool {
    a.source() == b.source() && a.flags() == b.flags() && a.last_index == b.last_index
}

/// Compares two typed arrays by their raw little-endian byte stores.
pub fn are_similar_typed_arrays(a: &TypedArrayData, b: &TypedArrayData) -> bool {
    cmp_bytes(&a.bytes, &b.bytes)
}

/// Element-wise `===` comparison for float arrays: `NaN` lanes never match,
/// `+0` and `-0` lanes do. Non-float subtypes fall back to byte comparison.
///
/// # Example
///
/// ```
/// use deep_assert_equal::are_similar_float_arrays;
/// use deep_assert_value::TypedArrayData;
///
/// let zeros = TypedArrayData::from_f32(&[0.0]);
/// let negative_zeros = TypedArrayData::from_f32(&[-0.0]);
/// assert!(are_similar_float_arrays(&zeros, &negative_zeros));
///
/// let nans = TypedArrayData::from_f32(&[f32::NAN]);
/// assert!(!are_similar_float_arrays(&nans, &nans.clone()));
/// ```
pub fn are_similar_float_arrays(a: &TypedArrayData, b: &TypedArrayData) -> bool {
    if a.byte_length() != b.byte_length() {
        return false;
    }
    match a.kind {
        TypedArrayKind::Float32 => (0..a.len()).all(|i| a.f32_at(i) == b.f32_at(i)),
        TypedArrayKind::Float64 => (0..a.len()).all(|i| a.f64_at(i) == b.f64_at(i)),
        _ => are_similar_typed_arrays(a, b),
    }
}

/// Compares two ArrayBuffer-likes by byte length and contents.
pub fn are_equal_array_buffers(a: &ArrayBufferData, b: &ArrayBufferData) -> bool {
    cmp_bytes(&a.bytes, &b.bytes)
}

/// Compares two boxed primitives by unwrapped value: `Object.is` semantics
/// for Number, `===` (or identity) for the rest. A pairing of two different
/// boxed kinds cannot be classified and raises
/// [`CompareError::UnknownBoxedPrimitive`]; there is no silent fallback.
pub fn are_equal_boxed_primitives(
    a: &BoxedPrimitive,
    b: &BoxedPrimitive,
) -> Result<bool, CompareError> {
    match (a, b) {
        (BoxedPrimitive::Number(x), BoxedPrimitive::Number(y)) => Ok(number_same_value(*x, *y)),
        (BoxedPrimitive::String(x), BoxedPrimitive::String(y)) => Ok(x == y),
        (BoxedPrimitive::Boolean(x), BoxedPrimitive::Boolean(y)) => Ok(x == y),
        (BoxedPrimitive::BigInt(x), BoxedPrimitive::BigInt(y)) => Ok(x == y),
        (BoxedPrimitive::Symbol(x), BoxedPrimitive::Symbol(y)) => Ok(x.same_identity(y)),
        _ => Err(CompareError::UnknownBoxedPrimitive),
    }
}
