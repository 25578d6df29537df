//! Set and Map equivalence matrix: multiset consumption matching, loose
//! primitive bridging, and extra own properties on collection objects.

use deep_assert_equal::{is_deep_equal, is_deep_strict_equal};
use deep_assert_value::Value;

fn strict(a: &Value, b: &Value) -> bool {
    is_deep_strict_equal(a, b).unwrap()
}

fn loose(a: &Value, b: &Value) -> bool {
    is_deep_equal(a, b).unwrap()
}

// ---------------------------------------------------------------------------
// Sets — primitives
// ---------------------------------------------------------------------------

#[test]
fn empty_sets() {
    assert!(strict(&Value::set_from([]), &Value::set_from([])));
}

#[test]
fn set_insertion_dedups() {
    // Both normalize to {1, 2} before comparison ever starts.
    let a = Value::set_from([Value::int(1), Value::int(1), Value::int(2)]);
    let b = Value::set_from([Value::int(1), Value::int(2), Value::int(2)]);
    assert!(strict(&a, &b));
}

#[test]
fn set_order_is_irrelevant() {
    let a = Value::set_from([Value::int(1), Value::int(2)]);
    let b = Value::set_from([Value::int(2), Value::int(1)]);
    assert!(strict(&a, &b));
}

#[test]
fn set_size_mismatch() {
    let a = Value::set_from([Value::int(1)]);
    let b = Value::set_from([Value::int(1), Value::int(2)]);
    assert!(!strict(&a, &b));
    assert!(!loose(&a, &b));
}

#[test]
fn set_nan_membership() {
    let a = Value::set_from([Value::Number(f64::NAN)]);
    let b = Value::set_from([Value::Number(f64::NAN)]);
    assert!(strict(&a, &b));
    assert!(loose(&a, &b));
}

#[test]
fn set_loose_coercion() {
    let a = Value::set_from([Value::int(1), Value::string("2")]);
    let b = Value::set_from([Value::string("1"), Value::int(2)]);
    assert!(loose(&a, &b));
    assert!(!strict(&a, &b));
}

#[test]
fn set_undefined_null_bridge() {
    let a = Value::set_from([Value::Undefined]);
    let b = Value::set_from([Value::Null]);
    assert!(loose(&a, &b));
    assert!(!strict(&a, &b));
}

#[test]
fn set_non_numeric_strings_never_bridge() {
    let a = Value::set_from([Value::string("a")]);
    let b = Value::set_from([Value::int(1)]);
    assert!(!loose(&a, &b));
}

#[test]
fn set_symbols_never_bridge() {
    let a = Value::set_from([Value::symbol(Some("s"))]);
    let b = Value::set_from([Value::symbol(Some("s"))]);
    assert!(!loose(&a, &b));
    assert!(!strict(&a, &b));

    let shared = Value::symbol(Some("s"));
    let c = Value::set_from([shared.clone()]);
    let d = Value::set_from([shared]);
    assert!(strict(&c, &d));
}

// ---------------------------------------------------------------------------
// Sets — structural elements and consumption
// ---------------------------------------------------------------------------

#[test]
fn set_structural_object_elements() {
    let a = Value::set_from([Value::object_from([("x", Value::int(1))])]);
    let b = Value::set_from([Value::object_from([("x", Value::int(1))])]);
    assert!(strict(&a, &b));

    let c = Value::set_from([Value::object_from([("x", Value::int(2))])]);
    assert!(!strict(&a, &c));
}

#[test]
fn set_consumption_is_one_shot() {
    // {p:1} and {p:1}' on one side cannot both match a single {p:1} plus an
    // unrelated {q:2} on the other.
    let a = Value::set_from([
        Value::object_from([("p", Value::int(1))]),
        Value::object_from([("p", Value::int(1))]),
    ]);
    let b = Value::set_from([
        Value::object_from([("p", Value::int(1))]),
        Value::object_from([("q", Value::int(2))]),
    ]);
    assert!(!strict(&a, &b));
    assert!(!loose(&a, &b));
}

#[test]
fn set_matching_multiset_of_objects() {
    let a = Value::set_from([
        Value::object_from([("p", Value::int(1))]),
        Value::object_from([("q", Value::int(2))]),
    ]);
    let b = Value::set_from([
        Value::object_from([("q", Value::int(2))]),
        Value::object_from([("p", Value::int(1))]),
    ]);
    assert!(strict(&a, &b));
}

#[test]
fn set_mixed_primitives_and_objects() {
    let a = Value::set_from([
        Value::int(1),
        Value::object_from([("x", Value::int(1))]),
    ]);
    let b = Value::set_from([
        Value::object_from([("x", Value::int(1))]),
        Value::int(1),
    ]);
    assert!(strict(&a, &b));
}

#[test]
fn sets_with_extra_own_properties() {
    let a = Value::set_from([Value::int(1)]);
    let b = Value::set_from([Value::int(1)]);
    a.as_object().unwrap().set("note", Value::int(7));
    assert!(!strict(&a, &b));
    b.as_object().unwrap().set("note", Value::int(7));
    assert!(strict(&a, &b));
}

// ---------------------------------------------------------------------------
// Maps — primitives
// ---------------------------------------------------------------------------

#[test]
fn empty_maps() {
    assert!(strict(&Value::map_from([]), &Value::map_from([])));
}

#[test]
fn map_primitive_keys() {
    let a = Value::map_from([(Value::string("k"), Value::int(1))]);
    let b = Value::map_from([(Value::string("k"), Value::int(1))]);
    assert!(strict(&a, &b));

    let c = Value::map_from([(Value::string("k"), Value::int(2))]);
    assert!(!strict(&a, &c));

    let d = Value::map_from([(Value::string("j"), Value::int(1))]);
    assert!(!strict(&a, &d));
}

#[test]
fn map_entry_order_is_irrelevant() {
    let a = Value::map_from([
        (Value::int(1), Value::string("a")),
        (Value::int(2), Value::string("b")),
    ]);
    let b = Value::map_from([
        (Value::int(2), Value::string("b")),
        (Value::int(1), Value::string("a")),
    ]);
    assert!(strict(&a, &b));
}

#[test]
fn map_nan_keys() {
    let a = Value::map_from([(Value::Number(f64::NAN), Value::int(1))]);
    let b = Value::map_from([(Value::Number(f64::NAN), Value::int(1))]);
    assert!(strict(&a, &b));
}

#[test]
fn map_undefined_value_vs_missing_key() {
    let a = Value::map_from([(Value::string("k"), Value::Undefined)]);
    let b = Value::map_from([(Value::string("j"), Value::Undefined)]);
    // Sizes match but the keys do not; an undefined value is not a missing
    // entry.
    assert!(!strict(&a, &b));
    assert!(!loose(&a, &b));
}

#[test]
fn map_loose_key_coercion() {
    let a = Value::map_from([(Value::int(1), Value::string("v"))]);
    let b = Value::map_from([(Value::string("1"), Value::string("v"))]);
    assert!(loose(&a, &b));
    assert!(!strict(&a, &b));
}

#[test]
fn map_loose_key_coercion_requires_equal_values() {
    let a = Value::map_from([(Value::int(1), Value::string("v"))]);
    let b = Value::map_from([(Value::string("1"), Value::string("w"))]);
    assert!(!loose(&a, &b));
}

#[test]
fn map_undefined_null_key_bridge() {
    let a = Value::map_from([(Value::Undefined, Value::int(1))]);
    let b = Value::map_from([(Value::Null, Value::int(1))]);
    assert!(loose(&a, &b));
    assert!(!strict(&a, &b));

    let c = Value::map_from([(Value::Null, Value::int(2))]);
    assert!(!loose(&a, &c));
}

// ---------------------------------------------------------------------------
// Maps — structural keys and consumption
// ---------------------------------------------------------------------------

#[test]
fn map_structural_keys() {
    let a = Value::map_from([(Value::object_from([("x", Value::int(1))]), Value::int(1))]);
    let b = Value::map_from([(Value::object_from([("x", Value::int(1))]), Value::int(1))]);
    assert!(strict(&a, &b));
}

#[test]
fn map_structural_keys_pair_with_their_own_values() {
    // Two structurally-identical keys must each consume the counterpart
    // whose value matches; no cross-matching.
    let a = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("x", Value::int(1))]), Value::int(2)),
    ]);
    let b = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("x", Value::int(1))]), Value::int(2)),
    ]);
    assert!(strict(&a, &b));
}

#[test]
fn map_structural_keys_with_mismatched_values() {
    let a = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("x", Value::int(1))]), Value::int(2)),
    ]);
    let b = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("x", Value::int(1))]), Value::int(3)),
    ]);
    assert!(!strict(&a, &b));
}

#[test]
fn map_structural_key_consumption_is_one_shot() {
    let a = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("y", Value::int(2))]), Value::int(2)),
    ]);
    let b = Value::map_from([
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
        (Value::object_from([("x", Value::int(1))]), Value::int(1)),
    ]);
    assert!(!strict(&a, &b));
}

#[test]
fn maps_with_extra_own_properties() {
    let a = Value::map_from([(Value::int(1), Value::int(1))]);
    let b = Value::map_from([(Value::int(1), Value::int(1))]);
    a.as_object().unwrap().set("note", Value::int(7));
    assert!(!strict(&a, &b));
    b.as_object().unwrap().set("note", Value::int(7));
    assert!(strict(&a, &b));
}

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

#[test]
fn set_of_sets() {
    let a = Value::set_from([Value::set_from([Value::int(1)]), Value::set_from([])]);
    let b = Value::set_from([Value::set_from([]), Value::set_from([Value::int(1)])]);
    assert!(strict(&a, &b));
}

#[test]
fn map_values_recurse() {
    let a = Value::map_from([(
        Value::string("k"),
        Value::map_from([(Value::int(1), Value::array_from([Value::int(2)]))]),
    )]);
    let b = Value::map_from([(
        Value::string("k"),
        Value::map_from([(Value::int(1), Value::array_from([Value::int(2)]))]),
    )]);
    assert!(strict(&a, &b));
}
