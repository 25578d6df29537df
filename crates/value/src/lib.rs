//! deep-assert-value — JavaScript-style runtime value model.
//!
//! The equality engine in `deep-assert-equal` decides whether two arbitrary
//! runtime values are "the same". In a dynamic language the operands arrive
//! as-is; here they are first lifted into the closed [`Value`] sum type this
//! crate defines: primitives, boxed primitives, dates, regular expressions,
//! errors, typed arrays, array buffers, sets, maps, plain objects and arrays,
//! and opaque weak collections.
//!
//! Objects are identity-bearing handles ([`ObjectHandle`]), so reference
//! cycles are expressible and pointer identity is observable; both are load
//! bearing for the engine's cycle-safe recursion.
//!
//! Also provided:
//!
//! - [`ops`] — the abstract operations (`===`, `Object.is`, SameValueZero,
//!   `==` coercion, ToNumber) the engine builds on.
//! - [`from_json`] / [`to_json`] — the `serde_json` boundary bridge.
//! - [`structured_clone`] — a cycle-preserving deep copy, useful for building
//!   structurally-equal but reference-distinct graphs.

mod clone;
mod json;
mod object;
pub mod ops;
mod regexp;
mod symbol;
mod tag;
mod typed_array;
mod value;

pub use clone::{structured_clone, CloneError};
pub use json::{from_json, to_json, JsonError};
pub use object::{
    as_array_index, ArrayBufferData, BoxedPrimitive, ErrorData, ErrorKind, Exotic, ObjectData,
    ObjectHandle, ObjectId, PropKey, Proto, ProtoId,
};
pub use regexp::{RegExpData, RegExpError};
pub use symbol::SymbolValue;
pub use tag::Tag;
pub use typed_array::{TypedArrayData, TypedArrayKind};
pub use value::Value;
