//! Option values held by a session.
//!
//! ## Core Types
//!
//! - [`OptionValue`]: one slot of the value store, keyed by the option's
//!   [`ValueKind`]
//! - [`StringValue`]: a string slot, which is empty, borrows the static
//!   default, or owns a replacement
//!
//! Keeping the borrowed default apart from owned text is what lets
//! "still the default" be answered without comparing contents: a slot is
//! default only while it holds [`StringValue::Default`] (or is empty when
//! the default itself is empty).
//!
//! ```rust
//! use tidy_config::{OptionValue, StringValue};
//!
//! let owned = OptionValue::String(StringValue::Owned("x".to_string()));
//! assert_eq!(owned.as_str(), Some("x"));
//! assert_eq!(OptionValue::Integer(4).as_word(), Some(4));
//! ```

use crate::options::{DefaultValue, OptionDescriptor, ValueKind};
use serde::{Serialize, Serializer};
use std::fmt;

/// Contents of a string slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StringValue {
    /// No value. Setting an empty string stores this, never `Owned("")`.
    #[default]
    Null,
    /// The descriptor's static default, borrowed.
    Default(&'static str),
    /// Text owned by the session.
    Owned(String),
}

impl StringValue {
    /// Builds the slot contents for new text. Empty text yields [`StringValue::Null`].
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            StringValue::Null
        } else {
            StringValue::Owned(text.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StringValue::Null => None,
            StringValue::Default(s) => Some(s),
            StringValue::Owned(s) => Some(s.as_str()),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, StringValue::Null)
    }
}

/// One slot of the value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Integer(u64),
    Boolean(bool),
    String(StringValue),
}

impl OptionValue {
    /// The static default for `opt`.
    #[must_use]
    pub fn default_for(opt: &OptionDescriptor) -> Self {
        match (opt.kind, opt.default) {
            (ValueKind::String, DefaultValue::Str(Some(s))) => {
                OptionValue::String(StringValue::Default(s))
            }
            (ValueKind::String, _) => OptionValue::String(StringValue::Null),
            (ValueKind::Boolean, d) => OptionValue::Boolean(word_of(d) != 0),
            (ValueKind::Integer, d) => OptionValue::Integer(word_of(d)),
        }
    }

    /// True when the slot still holds `opt`'s static default.
    ///
    /// Strings are compared by where the text comes from, not by content: an
    /// owned copy equal to the default text still counts as changed.
    #[must_use]
    pub fn is_default_for(&self, opt: &OptionDescriptor) -> bool {
        match (self, opt.default) {
            (OptionValue::String(StringValue::Default(s)), DefaultValue::Str(Some(d))) => {
                std::ptr::eq(*s, d)
            }
            (OptionValue::String(StringValue::Null), DefaultValue::Str(None)) => true,
            (OptionValue::String(_), _) => false,
            (value, d) => value.as_word() == Some(word_of(d)),
        }
    }

    /// Integer or boolean contents as a word.
    #[must_use]
    pub fn as_word(&self) -> Option<u64> {
        match self {
            OptionValue::Integer(v) => Some(*v),
            OptionValue::Boolean(b) => Some(u64::from(*b)),
            OptionValue::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(b) => Some(*b),
            OptionValue::Integer(v) => Some(*v != 0),
            OptionValue::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => s.as_str(),
            _ => None,
        }
    }

    /// Value equality: words by value, strings by content, with two empty
    /// slots equal.
    #[must_use]
    pub fn same_as(&self, other: &OptionValue) -> bool {
        match (self, other) {
            (OptionValue::String(a), OptionValue::String(b)) => a.as_str() == b.as_str(),
            (a, b) => a.as_word().is_some() && a.as_word() == b.as_word(),
        }
    }
}

fn word_of(default: DefaultValue) -> u64 {
    match default {
        DefaultValue::Word(w) => w,
        DefaultValue::Str(_) => 0,
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::Boolean(b) => f.write_str(if *b { "yes" } else { "no" }),
            OptionValue::String(s) => f.write_str(s.as_str().unwrap_or("")),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionValue::Integer(v) => serializer.serialize_u64(*v),
            OptionValue::Boolean(b) => serializer.serialize_bool(*b),
            OptionValue::String(s) => match s.as_str() {
                Some(text) => serializer.serialize_str(text),
                None => serializer.serialize_none(),
            },
        }
    }
}

impl From<u64> for OptionValue {
    fn from(v: u64) -> Self {
        OptionValue::Integer(v)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Boolean(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(StringValue::from_text(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionId;

    #[test]
    fn test_defaults_by_kind() {
        assert_eq!(
            OptionValue::default_for(OptionId::WrapLen.descriptor()),
            OptionValue::Integer(68)
        );
        assert_eq!(
            OptionValue::default_for(OptionId::Mark.descriptor()),
            OptionValue::Boolean(true)
        );
        assert_eq!(
            OptionValue::default_for(OptionId::AltText.descriptor()),
            OptionValue::String(StringValue::Null)
        );
    }

    #[test]
    fn test_empty_text_is_null() {
        assert_eq!(StringValue::from_text(""), StringValue::Null);
        assert_eq!(OptionValue::from(""), OptionValue::String(StringValue::Null));
    }

    #[test]
    fn test_owned_string_is_not_default() {
        let alt = OptionId::AltText.descriptor();
        assert!(OptionValue::String(StringValue::Null).is_default_for(alt));
        assert!(!OptionValue::from("x").is_default_for(alt));
    }

    #[test]
    fn test_same_as() {
        let a = OptionValue::String(StringValue::Owned("a, b".into()));
        let b = OptionValue::String(StringValue::Owned("a, b".into()));
        assert!(a.same_as(&b));
        assert!(OptionValue::from("").same_as(&OptionValue::String(StringValue::Null)));
        assert!(!OptionValue::Integer(1).same_as(&OptionValue::Integer(2)));
        assert!(!OptionValue::from("1").same_as(&OptionValue::Integer(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionValue::Boolean(true).to_string(), "yes");
        assert_eq!(OptionValue::Integer(8).to_string(), "8");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
    }
}
