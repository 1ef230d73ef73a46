//! Generic property storage shared across graph types.
//!
//! Used for node metadata and filter parameter sets. Keys keep their
//! insertion order so parameter snapshots capture and restore values
//! deterministically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered string key/value property set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    map: IndexMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Set a property, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    /// Set an integer property (stored in string form).
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.map.insert(key.into(), value.to_string());
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Get a property parsed as an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.map.get(key).and_then(|v| v.parse().ok())
    }

    /// Remove a property, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-capture a single property from another set.
    ///
    /// Copies the key's current value, or removes the key here if the other
    /// set no longer carries it.
    pub fn pass(&mut self, other: &Properties, key: &str) {
        match other.get(key) {
            Some(value) => self.set(key, value),
            None => {
                self.remove(key);
            }
        }
    }

    /// Overlay every property from another set onto this one.
    ///
    /// Keys only present here are kept; keys present in both take the other
    /// set's value.
    pub fn inherit(&mut self, other: &Properties) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.map.iter().eq(other.map.iter())
    }
}

impl Eq for Properties {}
