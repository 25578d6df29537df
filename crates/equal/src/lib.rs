//! deep-assert-equal — deep structural equality for runtime values.
//!
//! Decides whether two [`deep_assert_value::Value`] graphs are "the same"
//! for assertion purposes: recursively, safely in the presence of reference
//! cycles, and under two distinct semantics.
//!
//! - [`is_deep_strict_equal`] — same category tags and prototypes,
//!   `Object.is`-style scalar comparison, symbol-keyed properties included.
//! - [`is_deep_equal`] — loose: primitive pairs coerce like `==`, Set/Map
//!   membership tolerates coercion, prototypes are ignored.
//!
//! Set and Map contents compare as true multisets: every successful match
//! consumes its counterpart, so one element can never witness two matches.
//! Cyclic graphs terminate via a visited-pair memo scoped to the active
//! recursion path.
//!
//! Both entry points return `Result` because two conditions have no honest
//! boolean answer and raise [`CompareError`] instead: distinct
//! WeakMap/WeakSet instances, and a boxed-primitive pairing the leaf
//! comparator cannot classify.
//!
//! # Example
//!
//! ```
//! use deep_assert_equal::{is_deep_equal, is_deep_strict_equal};
//! use deep_assert_value::Value;
//!
//! let a = Value::object_from([("n", Value::int(1))]);
//! let b = Value::object_from([("n", Value::string("1"))]);
//! assert!(is_deep_equal(&a, &b).unwrap());
//! assert!(!is_deep_strict_equal(&a, &b).unwrap());
//! ```

mod cmp;
mod collections;
mod deep_equal;
mod error;
mod key_check;
mod memo;

pub use cmp::{
    are_equal_array_buffers, are_equal_boxed_primitives, are_equal_dates,
    are_similar_float_arrays, are_similar_regexps, are_similar_typed_arrays,
};
pub use deep_equal::{deep_equal, is_deep_equal, is_deep_strict_equal};
pub use error::CompareError;
