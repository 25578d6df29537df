//! serde_json boundary bridge.
//!
//! Dynamic values enter the engine as [`Value`]; JSON documents are the most
//! common source. [`from_json`] lifts losslessly. [`to_json`] lowers the
//! JSON-representable subset, with `JSON.stringify` conventions: array holes
//! and `undefined` elements render as `null`, `undefined`-valued and
//! symbol-keyed object properties are skipped.

use serde_json::{Map, Number, Value as JsonValue};
use thiserror::Error;

use crate::object::{Exotic, ObjectHandle, ObjectId, PropKey};
use crate::value::Value;

/// Error type for lowering values to JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("value cannot be represented as json")]
    Unrepresentable,
    #[error("cyclic value cannot be represented as json")]
    Cyclic,
}

/// Lifts a JSON document into the value model.
///
/// # Example
///
/// ```
/// use deep_assert_value::{from_json, Tag};
/// use serde_json::json;
///
/// let value = from_json(&json!({"a": [1, null]}));
/// assert_eq!(value.tag(), Some(Tag::Object));
/// ```
pub fn from_json(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        JsonValue::String(s) => Value::string(s),
        JsonValue::Array(items) => Value::array_from(items.iter().map(from_json)),
        JsonValue::Object(map) => {
            let handle = ObjectHandle::ordinary();
            for (key, item) in map {
                handle.set(key.as_str(), from_json(item));
            }
            Value::Object(handle)
        }
    }
}

/// Lowers a value to JSON. Fails on non-JSON categories (dates, sets, typed
/// arrays, ...), on non-finite numbers, and on cyclic graphs.
pub fn to_json(value: &Value) -> Result<JsonValue, JsonError> {
    to_json_inner(value, &mut Vec::new())
}

fn to_json_inner(value: &Value, active: &mut Vec<ObjectId>) -> Result<JsonValue, JsonError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => Number::from_f64(*n)
            .map(JsonValue::Number)
            .ok_or(JsonError::Unrepresentable),
        Value::String(s) => Ok(JsonValue::String(s.to_string())),
        Value::Undefined | Value::BigInt(_) | Value::Symbol(_) => {
            Err(JsonError::Unrepresentable)
        }
        Value::Object(handle) => {
            if active.contains(&handle.id()) {
                return Err(JsonError::Cyclic);
            }
            active.push(handle.id());
            let result = lower_object(handle, active);
            active.pop();
            result
        }
    }
}

fn lower_object(handle: &ObjectHandle, active: &mut Vec<ObjectId>) -> Result<JsonValue, JsonError> {
    let data = handle.data();
    match &data.exotic {
        Exotic::Array(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(match element {
                    None | Some(Value::Undefined) => JsonValue::Null,
                    Some(item) => to_json_inner(item, active)?,
                });
            }
            Ok(JsonValue::Array(items))
        }
        Exotic::Ordinary => {
            let mut map = Map::new();
            for (key, item) in &data.properties {
                let key = match key {
                    PropKey::String(s) => s.to_string(),
                    PropKey::Symbol(_) => continue,
                };
                if item.is_undefined() {
                    continue;
                }
                map.insert(key, to_json_inner(item, active)?);
            }
            Ok(JsonValue::Object(map))
        }
        _ => Err(JsonError::Unrepresentable),
    }
}
