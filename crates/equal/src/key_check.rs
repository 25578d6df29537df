//! Structural key comparator.
//!
//! `key_check` establishes that two objects have the same own-key universe
//! before any values are compared, registers the pair in the cycle memo, and
//! hands the per-element body to `obj_equiv`. `obj_equiv` runs the
//! container-specific walk (Set/Map consumption matching, the array index
//! walk with its sparse fallback) and then compares the accumulated key list
//! pairwise through the driver.

use deep_assert_value::{ObjectHandle, PropKey, Value};

use crate::collections::{map_equiv, set_equiv};
use crate::deep_equal::inner_deep_equal;
use crate::error::CompareError;
use crate::memo::{Memo, MemoStep};

/// Which container walk `obj_equiv` must run before the keyed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IterationKind {
    None,
    Array,
    Set,
    Map,
}

pub(crate) fn key_check(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    memo: &mut Memo,
    kind: IterationKind,
    precomputed: Option<Vec<PropKey>>,
) -> Result<bool, CompareError> {
    let precomputed_given = precomputed.is_some();
    let mut keys = match precomputed {
        Some(keys) => keys,
        None => {
            let keys1 = obj1.own_string_keys();
            let keys2 = obj2.own_string_keys();
            if keys1.len() != keys2.len() {
                return Ok(false);
            }
            keys1
        }
    };

    // Cheap pass: every key of obj1 must at least exist on obj2. Rejects
    // disjoint objects before any recursion.
    for key in &keys {
        if !obj2.has_own(key) {
            return Ok(false);
        }
    }

    // Symbol keys participate only in strict mode, and only when the key
    // list was not fixed by the caller.
    if strict && !precomputed_given {
        let symbols1 = obj1.own_symbol_keys();
        if !symbols1.is_empty() {
            let count = symbols1.len();
            for symbol in symbols1 {
                let key = PropKey::Symbol(symbol);
                if !obj2.has_own(&key) {
                    return Ok(false);
                }
                keys.push(key);
            }
            if obj2.own_symbol_keys().len() != count {
                return Ok(false);
            }
        } else if !obj2.own_symbol_keys().is_empty() {
            return Ok(false);
        }
    }

    if keys.is_empty() {
        let empty = match kind {
            IterationKind::None => true,
            IterationKind::Array => obj1.array_len() == 0,
            IterationKind::Set | IterationKind::Map => obj1.collection_size() == 0,
        };
        if empty {
            return Ok(true);
        }
    }

    let (id1, id2) = (obj1.id(), obj2.id());
    if let MemoStep::Cycle(equal) = memo.enter(id1, id2) {
        return Ok(equal);
    }
    let result = obj_equiv(obj1, obj2, strict, &keys, memo, kind);
    memo.leave(id1, id2);
    result
}

fn obj_equiv(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    keys: &[PropKey],
    memo: &mut Memo,
    kind: IterationKind,
) -> Result<bool, CompareError> {
    match kind {
        IterationKind::Set => {
            if !set_equiv(obj1, obj2, strict, memo)? {
                return Ok(false);
            }
        }
        IterationKind::Map => {
            if !map_equiv(obj1, obj2, strict, memo)? {
                return Ok(false);
            }
        }
        IterationKind::Array => {
            let length = obj1.array_len();
            let mut index = 0;
            while index < length {
                match (obj1.array_element(index), obj2.array_element(index)) {
                    (Some(item1), Some(item2)) => {
                        if !inner_deep_equal(&item1, &item2, strict, memo)? {
                            return Ok(false);
                        }
                    }
                    (Some(_), None) | (None, Some(_)) => return Ok(false),
                    (None, None) => {
                        // Hole on the primary side: the array is sparse.
                        // Its verdict supersedes the rest of the index walk
                        // and the trailing keyed pass.
                        return sparse_array_equiv(obj1, obj2, strict, memo, index);
                    }
                }
                index += 1;
            }
        }
        IterationKind::None => {}
    }

    for key in keys {
        let item1 = obj1.get_own(key).unwrap_or(Value::Undefined);
        let item2 = obj2.get_own(key).unwrap_or(Value::Undefined);
        if !inner_deep_equal(&item1, &item2, strict, memo)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Enumerated-key comparison for sparse arrays, resuming at `cursor`.
///
/// Index keys enumerate ascending ahead of named keys, so when the index
/// walk stops at hole `cursor`, the first `cursor` entries of the key list
/// are exactly the indices already compared; the walk continues by *key
/// list position*, not by index.
fn sparse_array_equiv(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    memo: &mut Memo,
    mut cursor: usize,
) -> Result<bool, CompareError> {
    let keys1 = obj1.own_string_keys();
    while cursor < keys1.len() {
        let key = &keys1[cursor];
        if !obj2.has_own(key) {
            return Ok(false);
        }
        let item1 = obj1.get_own(key).unwrap_or(Value::Undefined);
        let item2 = obj2.get_own(key).unwrap_or(Value::Undefined);
        if !inner_deep_equal(&item1, &item2, strict, memo)? {
            return Ok(false);
        }
        cursor += 1;
    }
    Ok(keys1.len() == obj2.own_string_keys().len())
}
