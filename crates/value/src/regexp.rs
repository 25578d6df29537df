//! Regular expression payloads.
//!
//! Construction validates the pattern and flags eagerly, the way `RegExp`
//! construction does, and keeps the compiled matcher for the [`is_match`]
//! accessor. Comparison consumes only `source`, `flags` and `last_index`.
//!
//! Flags `i`, `m` and `s` translate to the matcher's inline flags; the
//! remaining flags (`d`, `g`, `u`, `v`, `y`) affect iteration semantics, not
//! what a pattern matches, and are preserved verbatim for comparison.
//!
//! [`is_match`]: RegExpData::is_match

use std::rc::Rc;

use regex::Regex;
use thiserror::Error;

const KNOWN_FLAGS: &str = "dgimsuvy";

/// Error type for regular expression construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegExpError {
    #[error("invalid regular expression flags: {0}")]
    InvalidFlags(String),
    #[error("invalid regular expression pattern: {0}")]
    InvalidPattern(String),
}

/// A regular expression value: pattern source, flag string, the mutable
/// `last_index` cursor, and the compiled matcher.
#[derive(Debug, Clone)]
pub struct RegExpData {
    source: Rc<str>,
    flags: Rc<str>,
    pub last_index: u64,
    compiled: Regex,
}

impl RegExpData {
    /// Compiles `source` with `flags`, rejecting unknown or repeated flags
    /// and patterns the matcher cannot express.
    pub fn new(source: &str, flags: &str) -> Result<Self, RegExpError> {
        let mut seen = Vec::new();
        for flag in flags.chars() {
            if !KNOWN_FLAGS.contains(flag) || seen.contains(&flag) {
                return Err(RegExpError::InvalidFlags(flags.to_string()));
            }
            seen.push(flag);
        }
        let mut inline = String::new();
        for flag in ['i', 'm', 's'] {
            if seen.contains(&flag) {
                inline.push(flag);
            }
        }
        let pattern = if inline.is_empty() {
            source.to_string()
        } else {
            format!("(?{inline}){source}")
        };
        let compiled =
            Regex::new(&pattern).map_err(|err| RegExpError::InvalidPattern(err.to_string()))?;
        Ok(Self {
            source: Rc::from(source),
            flags: Rc::from(flags),
            last_index: 0,
            compiled,
        })
    }

    /// The pattern source, exactly as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flag string, exactly as given.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_and_matches() {
        let re = RegExpData::new("ab+c", "i").unwrap();
        assert_eq!(re.source(), "ab+c");
        assert_eq!(re.flags(), "i");
        assert_eq!(re.last_index, 0);
        assert!(re.is_match("xABBBCx"));
        assert!(!re.is_match("ac"));
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(matches!(
            RegExpData::new("a", "gg"),
            Err(RegExpError::InvalidFlags(_))
        ));
        assert!(matches!(
            RegExpData::new("a", "q"),
            Err(RegExpError::InvalidFlags(_))
        ));
    }

    #[test]
    fn rejects_bad_pattern() {
        assert!(matches!(
            RegExpData::new("a(", ""),
            Err(RegExpError::InvalidPattern(_))
        ));
    }

    #[test]
    fn non_matcher_flags_are_kept() {
        let re = RegExpData::new("a", "gy").unwrap();
        assert_eq!(re.flags(), "gy");
        assert!(re.is_match("banana"));
    }
}
