//! Dynamic value representation for VDF data.
//!
//! This module provides the [`Value`] enum which represents any parsed VDF
//! node. VDF is stringly typed: every leaf is a string, and everything else
//! is an ordered object of string keys to child nodes.
//!
//! ## Core Types
//!
//! - [`Value`]: a leaf string or a nested object
//! - [`VdfMap`]: the ordered map backing objects (see [`crate::map`])
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_vdf::{Value, VdfMap};
//!
//! let leaf = Value::from("440");
//! let mut map = VdfMap::new();
//! map.insert("appid".to_string(), leaf);
//! let object = Value::from(map);
//!
//! assert!(object.is_object());
//! ```
//!
//! ### Navigating Parsed Data
//!
//! ```rust
//! use serde_vdf::parse;
//!
//! let doc = parse(r#""AppState" { "appid" "440" "name" "Team Fortress 2" }"#).unwrap();
//! let state = doc.get("AppState").and_then(|v| v.as_object()).unwrap();
//! assert_eq!(state.get("appid").and_then(|v| v.as_str()), Some("440"));
//! ```

use crate::VdfMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A parsed VDF node: a leaf string or an ordered mapping of string keys to
/// child nodes.
///
/// # Examples
///
/// ```rust
/// use serde_vdf::{Value, VdfMap};
///
/// let text = Value::String("hello".to_string());
/// let object = Value::Object(VdfMap::new());
///
/// assert!(text.is_string());
/// assert!(object.is_object());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Object(VdfMap),
}

impl Value {
    /// Returns `true` if the value is a leaf string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::{Value, VdfMap};
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Object(VdfMap::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(_) => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&VdfMap> {
        match self {
            Value::Object(obj) => Some(obj),
            Value::String(_) => None,
        }
    }

    /// If the value is an object, looks up `key` in it. Returns `None` for
    /// leaf strings and missing keys alike.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::parse;
    ///
    /// let doc = parse(r#"root { "k" "v" }"#).unwrap();
    /// let root = doc.get("root").unwrap();
    /// assert_eq!(root.get("k").and_then(|v| v.as_str()), Some("v"));
    /// assert!(root.get("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Object(obj) => write!(f, "{{{} entries}}", obj.len()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a map of strings to values")
            }

            // VDF is stringly typed, so scalars from richer formats fold
            // into their string form.
            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::String(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::String(String::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = VdfMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<VdfMap> for Value {
    fn from(value: VdfMap) -> Self {
        Value::Object(value)
    }
}
