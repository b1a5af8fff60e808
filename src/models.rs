//! Order Form Models
//!
//! Data structures shared by the form, the validator and the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One line of an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    /// Ordered product or restaurant name
    #[serde(default)]
    pub item: String,
    /// Substitute if the primary choice is unavailable
    #[serde(default)]
    pub fallback: String,
}

impl ItemEntry {
    pub fn new(item: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            fallback: fallback.into(),
        }
    }
}

/// Snapshot of the item list taken when the user submits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub items: Vec<ItemEntry>,
}

/// Field name -> human readable message
///
/// Ordered by field name so the rendered listing is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
