use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

/// Receives one message per failing field during a validation pass.
pub trait ErrorSink {
    fn report(&mut self, field: &str, message: &str);
}

/// Field name to message for every field that failed the last pass.
///
/// Passing fields are absent, never mapped to an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields and their messages, sorted by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl ErrorSink for ValidationErrors {
    fn report(&mut self, field: &str, message: &str) {
        if message.is_empty() {
            return;
        }
        self.errors.insert(field.to_string(), message.to_string());
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
