//! Typed-array payloads.
//!
//! Element data lives in a flat little-endian byte store, so comparing two
//! typed arrays of the same subtype is a raw byte comparison, and the float
//! subtypes can additionally be read lane-by-lane for element-wise `===`
//! semantics in loose mode.

use deep_assert_buffers::lanes::{read_f32_le, read_f64_le};

use crate::tag::Tag;

/// The element subtype of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
    /// DataView has no element type; it is byte-addressed.
    DataView,
}

impl TypedArrayKind {
    /// Element width in bytes.
    pub fn element_size(&self) -> usize {
        match self {
            TypedArrayKind::Int8
            | TypedArrayKind::Uint8
            | TypedArrayKind::Uint8Clamped
            | TypedArrayKind::DataView => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// The classification tag of this subtype.
    pub fn tag(&self) -> Tag {
        match self {
            TypedArrayKind::Int8 => Tag::Int8Array,
            TypedArrayKind::Uint8 => Tag::Uint8Array,
            TypedArrayKind::Uint8Clamped => Tag::Uint8ClampedArray,
            TypedArrayKind::Int16 => Tag::Int16Array,
            TypedArrayKind::Uint16 => Tag::Uint16Array,
            TypedArrayKind::Int32 => Tag::Int32Array,
            TypedArrayKind::Uint32 => Tag::Uint32Array,
            TypedArrayKind::Float32 => Tag::Float32Array,
            TypedArrayKind::Float64 => Tag::Float64Array,
            TypedArrayKind::BigInt64 => Tag::BigInt64Array,
            TypedArrayKind::BigUint64 => Tag::BigUint64Array,
            TypedArrayKind::DataView => Tag::DataView,
        }
    }

    /// Whether the subtype holds floating-point lanes.
    pub fn is_float(&self) -> bool {
        matches!(self, TypedArrayKind::Float32 | TypedArrayKind::Float64)
    }
}

/// A typed array: an element subtype over a little-endian byte store.
#[derive(Debug, Clone)]
pub struct TypedArrayData {
    pub kind: TypedArrayKind,
    pub bytes: Vec<u8>,
}

impl TypedArrayData {
    /// Wraps a raw byte store as a typed array of the given subtype.
    pub fn new(kind: TypedArrayKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    /// Total byte length of the store.
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Number of whole elements in the store.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.element_size()
    }

    /// Whether the store holds no whole element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the `f32` lane at element `index`. Meaningful for
    /// [`TypedArrayKind::Float32`] stores.
    pub fn f32_at(&self, index: usize) -> f32 {
        read_f32_le(&self.bytes, index * 4)
    }

    /// Reads the `f64` lane at element `index`. Meaningful for
    /// [`TypedArrayKind::Float64`] stores.
    pub fn f64_at(&self, index: usize) -> f64 {
        read_f64_le(&self.bytes, index * 8)
    }

    pub fn from_i8(values: &[i8]) -> Self {
        Self::new(TypedArrayKind::Int8, values.iter().map(|v| *v as u8).collect())
    }

    pub fn from_u8(values: &[u8]) -> Self {
        Self::new(TypedArrayKind::Uint8, values.to_vec())
    }

    pub fn from_u8_clamped(values: &[u8]) -> Self {
        Self::new(TypedArrayKind::Uint8Clamped, values.to_vec())
    }

    pub fn from_i16(values: &[i16]) -> Self {
        Self::new(TypedArrayKind::Int16, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_u16(values: &[u16]) -> Self {
        Self::new(TypedArrayKind::Uint16, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_i32(values: &[i32]) -> Self {
        Self::new(TypedArrayKind::Int32, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_u32(values: &[u32]) -> Self {
        Self::new(TypedArrayKind::Uint32, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_f32(values: &[f32]) -> Self {
        Self::new(TypedArrayKind::Float32, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_f64(values: &[f64]) -> Self {
        Self::new(TypedArrayKind::Float64, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_i64(values: &[i64]) -> Self {
        Self::new(TypedArrayKind::BigInt64, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn from_u64(values: &[u64]) -> Self {
        Self::new(TypedArrayKind::BigUint64, le_bytes(values.iter().map(|v| v.to_le_bytes())))
    }

    pub fn data_view(bytes: Vec<u8>) -> Self {
        Self::new(TypedArrayKind::DataView, bytes)
    }
}

fn le_bytes<const N: usize>(chunks: impl Iterator<Item = [u8; N]>) -> Vec<u8> {
    let mut bytes = Vec::new();
    for chunk in chunks {
        bytes.extend_from_slice(&chunk);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_counts() {
        let ta = TypedArrayData::from_i16(&[1, -2, 3]);
        assert_eq!(ta.byte_length(), 6);
        assert_eq!(ta.len(), 3);
        assert_eq!(ta.kind.tag(), Tag::Int16Array);
    }

    #[test]
    fn float_lanes_roundtrip() {
        let ta = TypedArrayData::from_f32(&[1.5, -0.0]);
        assert_eq!(ta.f32_at(0), 1.5);
        assert!(ta.f32_at(1).is_sign_negative());

        let ta = TypedArrayData::from_f64(&[f64::INFINITY]);
        assert_eq!(ta.f64_at(0), f64::INFINITY);
    }

    #[test]
    fn same_bytes_different_kind() {
        let a = TypedArrayData::from_u8(&[1, 2, 3]);
        let b = TypedArrayData::from_i8(&[1, 2, 3]);
        assert_eq!(a.bytes, b.bytes);
        assert_ne!(a.kind, b.kind);
    }
}
