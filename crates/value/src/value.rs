//! The runtime value type and its constructors.

use std::rc::Rc;

use crate::object::{
    ArrayBufferData, BoxedPrimitive, ErrorData, ErrorKind, Exotic, ObjectHandle,
};
use crate::regexp::{RegExpData, RegExpError};
use crate::symbol::SymbolValue;
use crate::tag::Tag;
use crate::typed_array::TypedArrayData;

/// Any runtime value the engine can be asked about.
///
/// Primitives carry their payload inline; everything else is an
/// [`ObjectHandle`] with an exotic payload. `Null` is a primitive here even
/// though `typeof null` claims otherwise; the engine treats it as one.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(Rc<str>),
    Symbol(SymbolValue),
    Object(ObjectHandle),
}

impl Value {
    // ── predicates ───────────────────────────────────────────────────────

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True only for object handles; `null` is a primitive here.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Value::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// Whether this is the number `NaN`.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// The classification tag, for object values.
    pub fn tag(&self) -> Option<Tag> {
        self.as_object().map(ObjectHandle::tag)
    }

    /// The `typeof` string of the value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) => "object",
        }
    }

    // ── primitive constructors ───────────────────────────────────────────

    pub fn string(s: impl AsRef<str>) -> Value {
        Value::String(Rc::from(s.as_ref()))
    }

    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn int(n: i64) -> Value {
        Value::Number(n as f64)
    }

    pub fn bigint(n: i128) -> Value {
        Value::BigInt(n)
    }

    /// A fresh symbol with an optional description.
    pub fn symbol(description: Option<&str>) -> Value {
        Value::Symbol(SymbolValue::new(description))
    }

    // ── object constructors ──────────────────────────────────────────────

    /// An empty plain object.
    pub fn new_object() -> Value {
        Value::Object(ObjectHandle::ordinary())
    }

    /// A plain object with the given string-keyed properties.
    pub fn object_from<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
        let handle = ObjectHandle::ordinary();
        for (key, value) in entries {
            handle.set(key, value);
        }
        Value::Object(handle)
    }

    /// A dense array of the given elements.
    pub fn array_from(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Array(
            items.into_iter().map(Some).collect(),
        )))
    }

    /// An array with explicit holes (`None` entries).
    pub fn array_sparse(items: Vec<Option<Value>>) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Array(items)))
    }

    /// A Set of the given elements, deduplicated under SameValueZero.
    pub fn set_from(items: impl IntoIterator<Item = Value>) -> Value {
        let handle = ObjectHandle::new(Exotic::Set(Vec::new()));
        for item in items {
            handle.set_add(item);
        }
        Value::Object(handle)
    }

    /// A Map of the given entries; later duplicates overwrite earlier ones.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        let handle = ObjectHandle::new(Exotic::Map(Vec::new()));
        for (key, value) in entries {
            handle.map_set(key, value);
        }
        Value::Object(handle)
    }

    /// A Date with the given millisecond timestamp (`NaN` for invalid).
    pub fn date(timestamp: f64) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Date(timestamp)))
    }

    /// A compiled regular expression value.
    pub fn regexp(source: &str, flags: &str) -> Result<Value, RegExpError> {
        Ok(Value::Object(ObjectHandle::new(Exotic::RegExp(
            RegExpData::new(source, flags)?,
        ))))
    }

    /// An error object of the given kind.
    pub fn error(kind: ErrorKind, message: &str) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Error(ErrorData::new(
            kind, message,
        ))))
    }

    pub fn boxed_number(n: f64) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Boxed(BoxedPrimitive::Number(n))))
    }

    pub fn boxed_string(s: &str) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Boxed(BoxedPrimitive::String(
            Rc::from(s),
        ))))
    }

    pub fn boxed_bool(b: bool) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Boxed(BoxedPrimitive::Boolean(b))))
    }

    pub fn boxed_bigint(n: i128) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Boxed(BoxedPrimitive::BigInt(n))))
    }

    pub fn boxed_symbol(symbol: SymbolValue) -> Value {
        Value::Object(ObjectHandle::new(Exotic::Boxed(BoxedPrimitive::Symbol(
            symbol,
        ))))
    }

    pub fn typed_array(data: TypedArrayData) -> Value {
        Value::Object(ObjectHandle::new(Exotic::TypedArray(data)))
    }

    pub fn array_buffer(bytes: Vec<u8>) -> Value {
        Value::Object(ObjectHandle::new(Exotic::ArrayBuffer(ArrayBufferData {
            shared: false,
            bytes,
        })))
    }

    pub fn shared_array_buffer(bytes: Vec<u8>) -> Value {
        Value::Object(ObjectHandle::new(Exotic::ArrayBuffer(ArrayBufferData {
            shared: true,
            bytes,
        })))
    }

    pub fn weak_set() -> Value {
        Value::Object(ObjectHandle::new(Exotic::WeakSet))
    }

    pub fn weak_map() -> Value {
        Value::Object(ObjectHandle::new(Exotic::WeakMap))
    }
}
