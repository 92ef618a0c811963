//! Value and Dict definitions
//!
//! Discriminated configuration values with shape-checked accessors.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DictError;

/// A single dynamic configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(Dict),
}

impl Value {
    /// Human readable name of this value's shape (used in diagnostics)
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a float",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Map(_) => "a mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Non-negative integers only
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Map(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Value::Map(v)
    }
}

/// An ordered mapping from string keys to dynamic values
///
/// Ordering is by key so that two dicts with the same content always
/// iterate (and encode) identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict(BTreeMap<String, Value>);

impl Dict {
    /// Create an empty dict
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copy every entry of `other` into this dict (entries of `other` win)
    pub fn extend_from(&mut self, other: &Dict) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    // =========================================================================
    // Shape-checked accessors
    // =========================================================================

    /// Look up a key, treating an explicit `null` as absent
    fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn wrong_type(key: &str, expected: &'static str, found: &Value) -> DictError {
        DictError::WrongType {
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }

    /// Required string value
    pub fn string(&self, key: &str) -> Result<&str, DictError> {
        self.string_opt(key)?.ok_or_else(|| DictError::Missing {
            key: key.to_string(),
        })
    }

    /// Required, non-empty string value
    pub fn non_empty_string(&self, key: &str) -> Result<&str, DictError> {
        let value = self.string(key)?;
        if value.is_empty() {
            return Err(DictError::Empty {
                key: key.to_string(),
            });
        }
        Ok(value)
    }

    pub fn string_opt(&self, key: &str) -> Result<Option<&str>, DictError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(key, "a string", v)),
        }
    }

    pub fn uint_opt(&self, key: &str) -> Result<Option<u64>, DictError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(key, "a non-negative integer", v)),
        }
    }

    /// Boolean value, or `default` when absent
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, DictError> {
        match self.present(key) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| Self::wrong_type(key, "a boolean", v)),
        }
    }

    pub fn array_opt(&self, key: &str) -> Result<Option<&[Value]>, DictError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_array()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(key, "an array", v)),
        }
    }

    pub fn dict_opt(&self, key: &str) -> Result<Option<&Dict>, DictError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_dict()
                .map(Some)
                .ok_or_else(|| Self::wrong_type(key, "a mapping", v)),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dict(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
