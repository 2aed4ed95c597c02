//! Property bags for chart nodes.
//!
//! A `Props` bag is a flat vector of `(key, value)` pairs, in the spirit of
//! the attribute lists used elsewhere in the tree: small, insertion-ordered,
//! and cheap to scan. Values are `PropValue` — primitives compare by value,
//! opaque payloads (datasets, callbacks) compare by identity only.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;
use smallvec::SmallVec;

// =============================================================================
// PropValue
// =============================================================================

/// A single property value.
///
/// `shallow_eq` mirrors the host framework's strict equality: primitives by
/// value (`NaN != NaN`), everything else by reference identity. There is no
/// deep structural comparison of values.
#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Str(CompactString),
    /// Opaque payload owned by the caller. Compared by `Arc::ptr_eq` only.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        self.shallow_eq(other)
    }
}

impl PropValue {
    /// Shallow equality: value comparison for primitives, identity for
    /// opaque payloads, `false` across variants.
    pub fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Get as a number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a string slice, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a bool, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Wrap an arbitrary payload as an identity-compared value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::Opaque(_) => write!(f, "Opaque(..)"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Str(CompactString::from(v))
    }
}

impl From<CompactString> for PropValue {
    fn from(v: CompactString) -> Self {
        Self::Str(v)
    }
}

// =============================================================================
// Props
// =============================================================================

/// Property bag keyed by name.
///
/// Insertion-ordered; key-set comparison in `shallow_eq` is
/// order-insensitive. Keys are unique — `set` updates in place.
#[derive(Debug, Clone, Default)]
pub struct Props {
    entries: SmallVec<[(CompactString, PropValue); 8]>,
}

impl Props {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a value (update if the key exists, append if not).
    pub fn set(&mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Remove a key, returning the old value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries
            .iter()
            .position(|(k, _)| k == key)
            .map(|pos| self.entries.remove(pos).1)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Numeric value of a key, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_number)
    }

    /// String value of a key, if present and a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Boolean value of a key, if present and boolean.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow equality: same key set and every value `shallow_eq`.
    ///
    /// Order-insensitive. Keys are unique per bag, so equal lengths plus
    /// one-directional containment imply the key sets match.
    pub fn shallow_eq(&self, other: &Props) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        self.entries
            .iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| v.shallow_eq(ov)))
    }
}

impl<K: Into<CompactString>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

// =============================================================================
// Tests
// =============================================================================
