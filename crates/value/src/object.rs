//! Object model — identity handles, own properties, exotic payloads.
//!
//! Every object value is an [`ObjectHandle`]: a shared, identity-bearing cell
//! holding a prototype slot, an exotic payload (the classification category),
//! and a table of own enumerable properties. Cloning a handle shares the
//! cell, which is what makes reference cycles expressible and pointer
//! identity observable.
//!
//! The property table stores own enumerable properties only: exactly the
//! key universe structural comparison consults. Array index properties live
//! in the array payload, not in the table, and enumerate in ascending order
//! ahead of named keys.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ops::same_value_zero;
use crate::regexp::RegExpData;
use crate::symbol::SymbolValue;
use crate::tag::Tag;
use crate::typed_array::TypedArrayData;
use crate::value::Value;

/// An own-property key: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropKey {
    String(Rc<str>),
    Symbol(SymbolValue),
}

impl PropKey {
    pub fn string(key: impl AsRef<str>) -> Self {
        PropKey::String(Rc::from(key.as_ref()))
    }

    pub fn symbol(symbol: SymbolValue) -> Self {
        PropKey::Symbol(symbol)
    }

    /// The string form of the key, if it is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropKey::String(s) => Some(s),
            PropKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropKey {
    fn from(key: &str) -> Self {
        PropKey::string(key)
    }
}

impl From<String> for PropKey {
    fn from(key: String) -> Self {
        PropKey::string(key)
    }
}

impl From<SymbolValue> for PropKey {
    fn from(symbol: SymbolValue) -> Self {
        PropKey::Symbol(symbol)
    }
}

/// Stable identity of an object cell, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Error constructor kinds. The kind fixes the intrinsic prototype and the
/// default `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Error,
    TypeError,
    RangeError,
    SyntaxError,
    ReferenceError,
    EvalError,
    UriError,
}

impl ErrorKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::UriError => "URIError",
        }
    }
}

/// Payload of an error object.
#[derive(Debug, Clone)]
pub struct ErrorData {
    pub kind: ErrorKind,
    pub name: Rc<str>,
    pub message: Rc<str>,
}

impl ErrorData {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            name: Rc::from(kind.default_name()),
            message: Rc::from(message),
        }
    }
}

/// Payload of a boxed (object-wrapped) primitive.
#[derive(Debug, Clone)]
pub enum BoxedPrimitive {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
    BigInt(i128),
    Symbol(SymbolValue),
}

impl BoxedPrimitive {
    pub fn tag(&self) -> Tag {
        match self {
            BoxedPrimitive::Number(_) => Tag::NumberObject,
            BoxedPrimitive::String(_) => Tag::StringObject,
            BoxedPrimitive::Boolean(_) => Tag::BooleanObject,
            BoxedPrimitive::BigInt(_) => Tag::BigIntObject,
            BoxedPrimitive::Symbol(_) => Tag::SymbolObject,
        }
    }
}

/// Payload of an ArrayBuffer-like object.
#[derive(Debug, Clone)]
pub struct ArrayBufferData {
    pub shared: bool,
    pub bytes: Vec<u8>,
}

/// The exotic payload of an object — its classification category plus the
/// category-specific data.
#[derive(Debug, Clone)]
pub enum Exotic {
    Ordinary,
    /// Hole-aware element store; `None` is a missing index.
    Array(Vec<Option<Value>>),
    /// Millisecond timestamp; `NaN` is an invalid date.
    Date(f64),
    RegExp(RegExpData),
    Error(ErrorData),
    Boxed(BoxedPrimitive),
    TypedArray(TypedArrayData),
    ArrayBuffer(ArrayBufferData),
    /// Insertion-ordered elements, unique under SameValueZero.
    Set(Vec<Value>),
    /// Insertion-ordered entries, keys unique under SameValueZero.
    Map(Vec<(Value, Value)>),
    /// Opaque: entries cannot be introspected.
    WeakSet,
    /// Opaque: entries cannot be introspected.
    WeakMap,
}

impl Exotic {
    pub fn tag(&self) -> Tag {
        match self {
            Exotic::Ordinary => Tag::Object,
            Exotic::Array(_) => Tag::Array,
            Exotic::Date(_) => Tag::Date,
            Exotic::RegExp(_) => Tag::RegExp,
            Exotic::Error(_) => Tag::Error,
            Exotic::Boxed(boxed) => boxed.tag(),
            Exotic::TypedArray(ta) => ta.kind.tag(),
            Exotic::ArrayBuffer(buf) => {
                if buf.shared {
                    Tag::SharedArrayBuffer
                } else {
                    Tag::ArrayBuffer
                }
            }
            Exotic::Set(_) => Tag::Set,
            Exotic::Map(_) => Tag::Map,
            Exotic::WeakSet => Tag::WeakSet,
            Exotic::WeakMap => Tag::WeakMap,
        }
    }
}

/// An object's prototype slot.
#[derive(Debug, Clone)]
pub enum Proto {
    /// The intrinsic prototype for the object's category.
    Default,
    /// No prototype (`Object.create(null)` analogue).
    Null,
    /// An explicit prototype object.
    Object(ObjectHandle),
}

/// Prototype identity, comparable across objects. Intrinsic prototypes are
/// identified by category tag (with the error constructor distinguished);
/// explicit prototypes by object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoId {
    Default(Tag, Option<ErrorKind>),
    Null,
    Object(ObjectId),
}

/// The state behind an object handle.
#[derive(Debug)]
pub struct ObjectData {
    pub proto: Proto,
    pub exotic: Exotic,
    pub properties: IndexMap<PropKey, Value>,
}

/// A shared, identity-bearing object cell.
#[derive(Clone)]
pub struct ObjectHandle(Rc<RefCell<ObjectData>>);

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cyclic graphs are routine here; printing identity and tag instead
        // of contents keeps Debug total.
        write!(f, "ObjectHandle({:?}@{:x})", self.tag(), self.id().0)
    }
}

impl ObjectHandle {
    pub fn new(exotic: Exotic) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            proto: Proto::Default,
            exotic,
            properties: IndexMap::new(),
        })))
    }

    pub fn ordinary() -> Self {
        Self::new(Exotic::Ordinary)
    }

    /// Pointer identity of the cell.
    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// Whether the two handles share one cell.
    pub fn same_identity(&self, other: &ObjectHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn data(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }

    pub fn data_mut(&self) -> RefMut<'_, ObjectData> {
        self.0.borrow_mut()
    }

    pub fn tag(&self) -> Tag {
        self.data().exotic.tag()
    }

    pub fn proto_id(&self) -> ProtoId {
        let data = self.data();
        match &data.proto {
            Proto::Default => {
                let error_kind = match &data.exotic {
                    Exotic::Error(error) => Some(error.kind),
                    _ => None,
                };
                ProtoId::Default(data.exotic.tag(), error_kind)
            }
            Proto::Null => ProtoId::Null,
            Proto::Object(proto) => ProtoId::Object(proto.id()),
        }
    }

    pub fn set_proto(&self, proto: Proto) {
        self.data_mut().proto = proto;
    }

    /// Defines an own enumerable property. On arrays, a canonical index key
    /// writes the element store instead, growing it with holes as needed.
    pub fn set(&self, key: impl Into<PropKey>, value: Value) {
        let key = key.into();
        let mut data = self.data_mut();
        if let Exotic::Array(elements) = &mut data.exotic {
            if let PropKey::String(s) = &key {
                if let Some(index) = as_array_index(s) {
                    if index >= elements.len() {
                        elements.resize(index + 1, None);
                    }
                    elements[index] = Some(value);
                    return;
                }
            }
        }
        data.properties.insert(key, value);
    }

    /// Reads an own property; array index keys resolve into the element
    /// store. Absent keys (and array holes) read as `None`.
    pub fn get_own(&self, key: &PropKey) -> Option<Value> {
        let data = self.data();
        if let Exotic::Array(elements) = &data.exotic {
            if let PropKey::String(s) = key {
                if let Some(index) = as_array_index(s) {
                    return elements.get(index).cloned().flatten();
                }
            }
        }
        data.properties.get(key).cloned()
    }

    pub fn has_own(&self, key: &PropKey) -> bool {
        let data = self.data();
        if let Exotic::Array(elements) = &data.exotic {
            if let PropKey::String(s) = key {
                if let Some(index) = as_array_index(s) {
                    return matches!(elements.get(index), Some(Some(_)));
                }
            }
        }
        data.properties.contains_key(key)
    }

    /// Own enumerable string keys: array index keys in ascending order
    /// first, then named keys in insertion order.
    pub fn own_string_keys(&self) -> Vec<PropKey> {
        let data = self.data();
        let mut keys = Vec::new();
        if let Exotic::Array(elements) = &data.exotic {
            for (index, element) in elements.iter().enumerate() {
                if element.is_some() {
                    keys.push(PropKey::string(index.to_string()));
                }
            }
        }
        for key in data.properties.keys() {
            if matches!(key, PropKey::String(_)) {
                keys.push(key.clone());
            }
        }
        keys
    }

    /// Own enumerable string keys excluding array index keys.
    pub fn named_keys(&self) -> Vec<PropKey> {
        self.data()
            .properties
            .keys()
            .filter(|key| matches!(key, PropKey::String(_)))
            .cloned()
            .collect()
    }

    /// Own enumerable symbol keys in insertion order.
    pub fn own_symbol_keys(&self) -> Vec<SymbolValue> {
        self.data()
            .properties
            .keys()
            .filter_map(|key| match key {
                PropKey::Symbol(symbol) => Some(symbol.clone()),
                PropKey::String(_) => None,
            })
            .collect()
    }

    /// Array length (element store length, holes included); 0 otherwise.
    pub fn array_len(&self) -> usize {
        match &self.data().exotic {
            Exotic::Array(elements) => elements.len(),
            _ => 0,
        }
    }

    /// The array element at `index`; `None` for holes, out-of-range indices
    /// and non-arrays.
    pub fn array_element(&self, index: usize) -> Option<Value> {
        match &self.data().exotic {
            Exotic::Array(elements) => elements.get(index).cloned().flatten(),
            _ => None,
        }
    }

    pub fn array_push(&self, value: Value) {
        if let Exotic::Array(elements) = &mut self.data_mut().exotic {
            elements.push(Some(value));
        }
    }

    pub fn array_push_hole(&self) {
        if let Exotic::Array(elements) = &mut self.data_mut().exotic {
            elements.push(None);
        }
    }

    /// Number of Set elements or Map entries; 0 otherwise.
    pub fn collection_size(&self) -> usize {
        match &self.data().exotic {
            Exotic::Set(elements) => elements.len(),
            Exotic::Map(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Adds a Set element under SameValueZero identity; `-0` is stored as
    /// `+0`. No-op when the element is already present or this is not a Set.
    pub fn set_add(&self, value: Value) {
        let value = normalize_zero(value);
        if let Exotic::Set(elements) = &mut self.data_mut().exotic {
            if !elements.iter().any(|element| same_value_zero(element, &value)) {
                elements.push(value);
            }
        }
    }

    pub fn set_has(&self, value: &Value) -> bool {
        match &self.data().exotic {
            Exotic::Set(elements) => elements.iter().any(|element| same_value_zero(element, value)),
            _ => false,
        }
    }

    /// Snapshot of the Set elements in insertion order.
    pub fn set_elements(&self) -> Vec<Value> {
        match &self.data().exotic {
            Exotic::Set(elements) => elements.clone(),
            _ => Vec::new(),
        }
    }

    /// Inserts a Map entry under SameValueZero key identity; `-0` keys are
    /// stored as `+0`, and an existing key keeps its position but takes the
    /// new value. No-op when this is not a Map.
    pub fn map_set(&self, key: Value, value: Value) {
        let key = normalize_zero(key);
        if let Exotic::Map(entries) = &mut self.data_mut().exotic {
            for (existing, slot) in entries.iter_mut() {
                if same_value_zero(existing, &key) {
                    *slot = value;
                    return;
                }
            }
            entries.push((key, value));
        }
    }

    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match &self.data().exotic {
            Exotic::Map(entries) => entries
                .iter()
                .find(|(existing, _)| same_value_zero(existing, key))
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    pub fn map_has(&self, key: &Value) -> bool {
        match &self.data().exotic {
            Exotic::Map(entries) => entries.iter().any(|(existing, _)| same_value_zero(existing, key)),
            _ => false,
        }
    }

    /// Snapshot of the Map entries in insertion order.
    pub fn map_entries(&self) -> Vec<(Value, Value)> {
        match &self.data().exotic {
            Exotic::Map(entries) => entries.clone(),
            _ => Vec::new(),
        }
    }
}

fn normalize_zero(value: Value) -> Value {
    match value {
        Value::Number(n) if n == 0.0 => Value::Number(0.0),
        other => other,
    }
}

/// Parses a canonical array index key: decimal digits, no leading zero,
/// below `u32::MAX`.
pub fn as_array_index(key: &str) -> Option<usize> {
    if key == "0" {
        return Some(0);
    }
    let bytes = key.as_bytes();
    if bytes.is_empty() || bytes[0] == b'0' || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u64 = key.parse().ok()?;
    if index < u32::MAX as u64 {
        Some(index as usize)
    } else {
        None
    }
}
