//! Read-only field access for candidate records.

use std::collections::{BTreeMap, HashMap};

/// A candidate record whose string fields can be looked up by name.
///
/// Only string values are visible to the engine; numbers, arrays and
/// nested objects read as missing.
pub trait Record {
    /// Returns the string value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&str>;
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(serde_json::Value::as_str)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(serde_json::Value::as_str)
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}
