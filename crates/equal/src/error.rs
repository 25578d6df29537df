use thiserror::Error;

/// Conditions under which the engine cannot honestly produce a boolean
/// verdict. These surface as errors rather than `false` so that "unknowable"
/// is never mistaken for "not equal".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Two distinct WeakMap or WeakSet instances: their entries cannot be
    /// introspected, so no structural answer exists.
    #[error("cannot compare distinct WeakMap or WeakSet instances")]
    IncomparableWeakCollection,
    /// A boxed-primitive pairing the comparator cannot classify.
    #[error("unknown boxed primitive pairing")]
    UnknownBoxedPrimitive,
}
