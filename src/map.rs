//! Ordered map type for VDF objects.
//!
//! This module provides [`VdfMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object entries. VDF files are written by
//! hand and by tools that care about section order, so a parse/re-display
//! round through this crate keeps keys in the order they first appeared.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: the CLI's JSON rendering lists keys in file
//!   order, every run
//! - **Iteration order**: entries iterate in first-insertion order
//! - **Last-wins duplicates**: re-inserting a key replaces its value while
//!   keeping the key's original position
//!
//! ## Examples
//!
//! ```rust
//! use serde_vdf::{Value, VdfMap};
//!
//! let mut map = VdfMap::new();
//! map.insert("name".to_string(), Value::from("Alyx"));
//! map.insert("game".to_string(), Value::from("Half-Life 2"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alyx"));
//! ```

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of string keys to VDF values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion
/// order. A whole parsed document is a `VdfMap` (with at most one root
/// entry), and so is every nested object inside it.
///
/// # Examples
///
/// ```rust
/// use serde_vdf::{Value, VdfMap};
///
/// let mut map = VdfMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VdfMap(IndexMap<String, crate::Value>);

impl VdfMap {
    /// Creates an empty `VdfMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::VdfMap;
    ///
    /// let map = VdfMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        VdfMap(IndexMap::new())
    }

    /// Creates an empty `VdfMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        VdfMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::{Value, VdfMap};
    ///
    /// let mut map = VdfMap::new();
    /// assert!(map.insert("key".to_string(), Value::from("1")).is_none());
    /// assert!(map.insert("key".to_string(), Value::from("2")).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Default for VdfMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for VdfMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<HashMap<String, crate::Value>> for VdfMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        VdfMap(map.into_iter().collect())
    }
}

impl From<VdfMap> for HashMap<String, crate::Value> {
    fn from(map: VdfMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for VdfMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VdfMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for VdfMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        VdfMap(IndexMap::from_iter(iter))
    }
}
