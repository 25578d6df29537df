//! Symbol values with reference identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A symbol value. Cloning shares identity; two symbols are equal only if
/// they are the same allocation, regardless of description.
#[derive(Clone)]
pub struct SymbolValue(Rc<SymbolData>);

struct SymbolData {
    description: Option<Rc<str>>,
}

impl SymbolValue {
    /// Creates a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Self(Rc::new(SymbolData {
            description: description.map(Rc::from),
        }))
    }

    /// The symbol's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Whether the two handles are the same symbol.
    pub fn same_identity(&self, other: &SymbolValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for SymbolValue {}

impl Hash for SymbolValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => write!(f, "Symbol({description})"),
            None => write!(f, "Symbol()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_not_description() {
        let a = SymbolValue::new(Some("x"));
        let b = SymbolValue::new(Some("x"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn description_is_preserved() {
        let a = SymbolValue::new(Some("tag"));
        assert_eq!(a.description(), Some("tag"));
        assert_eq!(SymbolValue::new(None).description(), None);
    }
}
