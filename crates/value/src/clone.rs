//! Cycle-preserving structured clone.
//!
//! Produces a deep copy whose object graph has the same shape as the source,
//! including shared references and cycles: a memo from source identity to
//! clone guarantees each source object is cloned once. Symbols and explicit
//! prototype objects are shared, not copied; their identity is the value.
//! Weak collections cannot be introspected and refuse to clone.

use std::collections::HashMap;

use thiserror::Error;

use crate::object::{Exotic, ObjectHandle, ObjectId};
use crate::value::Value;

/// Error type for the structured clone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloneError {
    #[error("cannot clone {0}")]
    NotCloneable(&'static str),
}

/// Deep-copies a value, preserving sharing and cycles.
///
/// # Example
///
/// ```
/// use deep_assert_value::{structured_clone, Value};
///
/// let obj = Value::object_from([("n", Value::int(1))]);
/// let copy = structured_clone(&obj).unwrap();
/// assert!(!obj.as_object().unwrap().same_identity(copy.as_object().unwrap()));
/// ```
pub fn structured_clone(value: &Value) -> Result<Value, CloneError> {
    Cloner::default().clone_value(value)
}

#[derive(Default)]
struct Cloner {
    memory: HashMap<ObjectId, Value>,
}

impl Cloner {
    fn clone_value(&mut self, value: &Value) -> Result<Value, CloneError> {
        match value {
            Value::Object(handle) => self.clone_object(handle),
            // Primitives copy directly; Rc-backed strings and symbols share
            // their allocation.
            other => Ok(other.clone()),
        }
    }

    fn clone_object(&mut self, handle: &ObjectHandle) -> Result<Value, CloneError> {
        if let Some(existing) = self.memory.get(&handle.id()) {
            return Ok(existing.clone());
        }
        let source = handle.data();
        // Leaf payloads copy now; container payloads start empty and fill
        // after the clone is memoized, so cycles resolve to the clone.
        let shell = match &source.exotic {
            Exotic::Ordinary => Exotic::Ordinary,
            Exotic::Array(_) => Exotic::Array(Vec::new()),
            Exotic::Set(_) => Exotic::Set(Vec::new()),
            Exotic::Map(_) => Exotic::Map(Vec::new()),
            Exotic::Date(timestamp) => Exotic::Date(*timestamp),
            Exotic::RegExp(regexp) => Exotic::RegExp(regexp.clone()),
            Exotic::Error(error) => Exotic::Error(error.clone()),
            Exotic::Boxed(boxed) => Exotic::Boxed(boxed.clone()),
            Exotic::TypedArray(ta) => Exotic::TypedArray(ta.clone()),
            Exotic::ArrayBuffer(buf) => Exotic::ArrayBuffer(buf.clone()),
            Exotic::WeakSet => return Err(CloneError::NotCloneable("WeakSet")),
            Exotic::WeakMap => return Err(CloneError::NotCloneable("WeakMap")),
        };
        let target = ObjectHandle::new(shell);
        target.set_proto(source.proto.clone());
        self.memory.insert(handle.id(), Value::Object(target.clone()));

        match &source.exotic {
            Exotic::Array(elements) => {
                let mut cloned = Vec::with_capacity(elements.len());
                for element in elements {
                    cloned.push(match element {
                        Some(item) => Some(self.clone_value(item)?),
                        None => None,
                    });
                }
                if let Exotic::Array(slot) = &mut target.data_mut().exotic {
                    *slot = cloned;
                }
            }
            Exotic::Set(elements) => {
                let mut cloned = Vec::with_capacity(elements.len());
                for element in elements {
                    cloned.push(self.clone_value(element)?);
                }
                if let Exotic::Set(slot) = &mut target.data_mut().exotic {
                    *slot = cloned;
                }
            }
            Exotic::Map(entries) => {
                let mut cloned = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    cloned.push((self.clone_value(key)?, self.clone_value(item)?));
                }
                if let Exotic::Map(slot) = &mut target.data_mut().exotic {
                    *slot = cloned;
                }
            }
            _ => {}
        }

        for (key, item) in &source.properties {
            let cloned = self.clone_value(item)?;
            target.data_mut().properties.insert(key.clone(), cloned);
        }
        Ok(Value::Object(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::PropKey;
    use crate::typed_array::TypedArrayData;

    #[test]
    fn clones_are_fresh_objects() {
        let source = Value::object_from([("a", Value::array_from([Value::int(1)]))]);
        let copy = structured_clone(&source).unwrap();
        let source = source.as_object().unwrap();
        let copy = copy.as_object().unwrap();
        assert!(!source.same_identity(copy));
        let inner_source = source.get_own(&PropKey::string("a")).unwrap();
        let inner_copy = copy.get_own(&PropKey::string("a")).unwrap();
        assert!(!inner_source
            .as_object()
            .unwrap()
            .same_identity(inner_copy.as_object().unwrap()));
    }

    #[test]
    fn cycles_are_preserved() {
        let source = Value::new_object();
        source.as_object().unwrap().set("self", source.clone());
        let copy = structured_clone(&source).unwrap();
        let copy = copy.as_object().unwrap();
        let inner = copy.get_own(&PropKey::string("self")).unwrap();
        assert!(inner.as_object().unwrap().same_identity(copy));
        assert!(!inner.as_object().unwrap().same_identity(source.as_object().unwrap()));
    }

    #[test]
    fn shared_children_stay_shared() {
        let shared = Value::new_object();
        let source = Value::object_from([("x", shared.clone()), ("y", shared)]);
        let copy = structured_clone(&source).unwrap();
        let copy = copy.as_object().unwrap();
        let x = copy.get_own(&PropKey::string("x")).unwrap();
        let y = copy.get_own(&PropKey::string("y")).unwrap();
        assert!(x.as_object().unwrap().same_identity(y.as_object().unwrap()));
    }

    #[test]
    fn symbols_share_identity() {
        let symbol = Value::symbol(Some("s"));
        let source = Value::array_from([symbol.clone()]);
        let copy = structured_clone(&source).unwrap();
        let cloned = copy.as_object().unwrap().array_element(0).unwrap();
        match (&symbol, &cloned) {
            (Value::Symbol(a), Value::Symbol(b)) => assert!(a.same_identity(b)),
            _ => panic!("expected symbols"),
        }
    }

    #[test]
    fn leaf_payloads_are_copied() {
        let ta = Value::typed_array(TypedArrayData::from_u8(&[1, 2, 3]));
        let copy = structured_clone(&ta).unwrap();
        let source_handle = ta.as_object().unwrap();
        let copy_handle = copy.as_object().unwrap();
        assert!(!source_handle.same_identity(copy_handle));
        match (&source_handle.data().exotic, &copy_handle.data().exotic) {
            (Exotic::TypedArray(a), Exotic::TypedArray(b)) => assert_eq!(a.bytes, b.bytes),
            _ => panic!("expected typed arrays"),
        };
    }

    #[test]
    fn weak_collections_refuse() {
        assert!(matches!(
            structured_clone(&Value::weak_map()),
            Err(CloneError::NotCloneable("WeakMap"))
        ));
        assert!(matches!(
            structured_clone(&Value::weak_set()),
            Err(CloneError::NotCloneable("WeakSet"))
        ));
    }
}
