//! Set and Map equivalence via consumption matching.
//!
//! Elements that cannot be resolved by plain membership go into a scratch
//! pool; each successful structural match consumes its pool entry
//! (`swap_remove`), so no element can witness two matches. The comparison is
//! true multiset matching, and the caller-owned collections are read through
//! snapshots — never mutated.
//!
//! In loose mode, primitives that miss exact membership may still "bridge":
//! `undefined` and `null` bridge through each other, numeric strings defer
//! to structural matching, while symbols, `NaN` and non-numeric strings
//! never bridge.

use deep_assert_value::ops::{same_value_zero, string_to_number};
use deep_assert_value::{ObjectHandle, Value};

use crate::deep_equal::inner_deep_equal;
use crate::error::CompareError;
use crate::memo::Memo;

enum LoosePrim {
    /// No alternate value exists; the primitive either may or may not
    /// bridge, definitively.
    Verdict(bool),
    /// Bridging goes through this alternate value.
    Alt(Value),
}

fn find_loose_matching_primitives(prim: &Value) -> LoosePrim {
    match prim {
        Value::Undefined => LoosePrim::Alt(Value::Null),
        Value::Null => LoosePrim::Alt(Value::Undefined),
        Value::Symbol(_) => LoosePrim::Verdict(false),
        Value::Number(n) => LoosePrim::Verdict(!n.is_nan()),
        Value::String(s) => LoosePrim::Verdict(!string_to_number(s).is_nan()),
        _ => LoosePrim::Verdict(true),
    }
}

fn set_has(items: &[Value], value: &Value) -> bool {
    items.iter().any(|item| same_value_zero(item, value))
}

fn map_get(entries: &[(Value, Value)], key: &Value) -> Option<Value> {
    entries
        .iter()
        .find(|(existing, _)| same_value_zero(existing, key))
        .map(|(_, item)| item.clone())
}

fn map_has(entries: &[(Value, Value)], key: &Value) -> bool {
    entries.iter().any(|(existing, _)| same_value_zero(existing, key))
}

fn set_might_have_loose_prim(items1: &[Value], items2: &[Value], prim: &Value) -> bool {
    match find_loose_matching_primitives(prim) {
        LoosePrim::Verdict(verdict) => verdict,
        LoosePrim::Alt(alt) => set_has(items2, &alt) && !set_has(items1, &alt),
    }
}

fn map_might_have_loose_prim(
    entries1: &[(Value, Value)],
    entries2: &[(Value, Value)],
    key: &Value,
    item1: &Value,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    match find_loose_matching_primitives(key) {
        LoosePrim::Verdict(verdict) => Ok(verdict),
        LoosePrim::Alt(alt) => {
            let item2 = match map_get(entries2, &alt) {
                Some(item2) => item2,
                None => return Ok(false),
            };
            Ok(inner_deep_equal(item1, &item2, false, memo)? && !map_has(entries1, &alt))
        }
    }
}

/// Scans the pool for an element deep-equal to `item1`, consuming it.
fn set_has_equal_element(
    pending: &mut Vec<Value>,
    item1: &Value,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    for index in 0..pending.len() {
        let candidate = pending[index].clone();
        if inner_deep_equal(item1, &candidate, strict, memo)? {
            pending.swap_remove(index);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Scans the pool for a key deep-equal to `key1` whose value in `entries1`
/// is deep-equal to `item1`, consuming the key.
fn map_has_equal_entry(
    pending: &mut Vec<Value>,
    entries1: &[(Value, Value)],
    key1: &Value,
    item1: &Value,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    for index in 0..pending.len() {
        let key2 = pending[index].clone();
        if inner_deep_equal(key1, &key2, strict, memo)? {
            let item2 = map_get(entries1, &key2).unwrap_or(Value::Undefined);
            if inner_deep_equal(item1, &item2, strict, memo)? {
                pending.swap_remove(index);
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub(crate) fn set_equiv(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    let items1 = obj1.set_elements();
    let items2 = obj2.set_elements();
    let mut pending: Vec<Value> = Vec::new();
    for item in &items1 {
        if item.is_object() {
            // Objects can only be matched structurally.
            pending.push(item.clone());
        } else if !set_has(&items2, item) {
            if strict {
                return Ok(false);
            }
            if !set_might_have_loose_prim(&items1, &items2, item) {
                return Ok(false);
            }
            pending.push(item.clone());
        }
    }
    if !pending.is_empty() {
        for item in &items2 {
            if item.is_object() {
                if !set_has_equal_element(&mut pending, item, strict, memo)? {
                    return Ok(false);
                }
            } else if !strict
                && !set_has(&items1, item)
                && !set_has_equal_element(&mut pending, item, false, memo)?
            {
                return Ok(false);
            }
        }
        return Ok(pending.is_empty());
    }
    Ok(true)
}

pub(crate) fn map_equiv(
    obj1: &ObjectHandle,
    obj2: &ObjectHandle,
    strict: bool,
    memo: &mut Memo,
) -> Result<bool, CompareError> {
    let entries1 = obj1.map_entries();
    let entries2 = obj2.map_entries();
    let mut pending: Vec<Value> = Vec::new();
    for (key, item1) in &entries1 {
        if key.is_object() {
            pending.push(key.clone());
        } else {
            // A missing key and a key mapped to `undefined` are different
            // outcomes; the snapshot lookup keeps them apart.
            let matched = match map_get(&entries2, key) {
                Some(item2) => inner_deep_equal(item1, &item2, strict, memo)?,
                None => false,
            };
            if !matched {
                if strict {
                    return Ok(false);
                }
                if !map_might_have_loose_prim(&entries1, &entries2, key, item1, memo)? {
                    return Ok(false);
                }
                pending.push(key.clone());
            }
        }
    }
    if !pending.is_empty() {
        for (key, item2) in &entries2 {
            if key.is_object() {
                if !map_has_equal_entry(&mut pending, &entries1, key, item2, strict, memo)? {
                    return Ok(false);
                }
            } else if !strict {
                let direct = match map_get(&entries1, key) {
                    Some(item1) => inner_deep_equal(&item1, item2, false, memo)?,
                    None => false,
                };
                if !direct
                    && !map_has_equal_entry(&mut pending, &entries1, key, item2, false, memo)?
                {
                    return Ok(false);
                }
            }
        }
        return Ok(pending.is_empty());
    }
    Ok(true)
}
