//! Value classification tags.
//!
//! A [`Tag`] is the coarse category the engine assigns to an object before
//! dispatching to a comparison strategy. Tag mismatch is the fast rejection:
//! two objects with different tags are never equal, in either mode. Typed
//! arrays carry one tag per element subtype so that, say, an `Int8Array`
//! never tag-matches a `Uint8Array`.

/// The classification tag of an object value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Object,
    Array,
    Date,
    RegExp,
    Error,
    Set,
    Map,
    WeakSet,
    WeakMap,
    ArrayBuffer,
    SharedArrayBuffer,
    Int8Array,
    Uint8Array,
    Uint8ClampedArray,
    Int16Array,
    Uint16Array,
    Int32Array,
    Uint32Array,
    Float32Array,
    Float64Array,
    BigInt64Array,
    BigUint64Array,
    DataView,
    NumberObject,
    StringObject,
    BooleanObject,
    BigIntObject,
    SymbolObject,
}

impl Tag {
    /// Whether the tag names a typed-array subtype (including DataView).
    pub fn is_array_buffer_view(&self) -> bool {
        matches!(
            self,
            Tag::Int8Array
                | Tag::Uint8Array
                | Tag::Uint8ClampedArray
                | Tag::Int16Array
                | Tag::Uint16Array
                | Tag::Int32Array
                | Tag::Uint32Array
                | Tag::Float32Array
                | Tag::Float64Array
                | Tag::BigInt64Array
                | Tag::BigUint64Array
                | Tag::DataView
        )
    }
}
