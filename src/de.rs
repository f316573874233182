//! Deserializing parsed VDF into Rust types.
//!
//! VDF carries no type information: every leaf is a string. The
//! [`Deserializer`](serde::Deserializer) implemented here parses leaves into
//! whatever the target type asks for, so `"440"` becomes a `u32` field and
//! `"1"` becomes `true` for a `bool` field.
//!
//! ## Usage
//!
//! The document's single root pair maps onto a struct with one field:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_vdf::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Document {
//!     root: App,
//! }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct App {
//!     appid: u32,
//!     name: String,
//! }
//!
//! let doc: Document = from_str(r#"root { appid 440 name "Team Fortress 2" }"#).unwrap();
//! assert_eq!(doc.root.appid, 440);
//! ```
//!
//! ## Sequences
//!
//! VDF has no array syntax; the convention is an object whose keys are
//! indices. A `Vec` target reads such an object's values in order and
//! ignores the keys.

use crate::{parse, Error, Result, Value};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Deserialize an instance of type `T` from a string of VDF text.
///
/// The whole document is deserialized, root key included, so the target's
/// outermost layer is a map with (at most) one entry.
///
/// # Errors
///
/// Returns an error if the input is not valid VDF or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    let document = parse(s)?;
    from_value(Value::Object(document))
}

/// Deserialize an instance of type `T` from an already-parsed [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_vdf::{from_value, parse, Value};
///
/// let doc = parse(r#"root { "k" "7" }"#).unwrap();
/// let root = doc.get("root").cloned().unwrap();
/// let n: std::collections::BTreeMap<String, i32> = from_value(root).unwrap();
/// assert_eq!(n["k"], 7);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

macro_rules! deserialize_parsed {
    ($method:ident, $visit:ident, $ty:ty, $what:literal) => {
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            match self {
                Value::String(s) => {
                    let parsed = s.trim().parse::<$ty>().map_err(|_| {
                        Error::custom(format!("cannot parse `{}` as {}", s, $what))
                    })?;
                    visitor.$visit(parsed)
                }
                Value::Object(_) => Err(Error::unsupported(concat!(
                    "cannot read an object as ",
                    $what
                ))),
            }
        }
    };
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_string(s),
            Value::Object(map) => visitor.visit_map(MapDeserializer::new(map.into_iter())),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            // Valve tooling writes booleans as 0/1.
            Value::String(s) => match s.trim() {
                "1" => visitor.visit_bool(true),
                "0" => visitor.visit_bool(false),
                other => {
                    let parsed = other
                        .parse::<bool>()
                        .map_err(|_| Error::custom(format!("invalid bool: `{}`", s)))?;
                    visitor.visit_bool(parsed)
                }
            },
            Value::Object(_) => Err(Error::unsupported("cannot read an object as a bool")),
        }
    }

    deserialize_parsed!(deserialize_i8, visit_i8, i8, "an i8");
    deserialize_parsed!(deserialize_i16, visit_i16, i16, "an i16");
    deserialize_parsed!(deserialize_i32, visit_i32, i32, "an i32");
    deserialize_parsed!(deserialize_i64, visit_i64, i64, "an i64");
    deserialize_parsed!(deserialize_u8, visit_u8, u8, "a u8");
    deserialize_parsed!(deserialize_u16, visit_u16, u16, "a u16");
    deserialize_parsed!(deserialize_u32, visit_u32, u32, "a u32");
    deserialize_parsed!(deserialize_u64, visit_u64, u64, "a u64");
    deserialize_parsed!(deserialize_f32, visit_f32, f32, "an f32");
    deserialize_parsed!(deserialize_f64, visit_f64, f64, "an f64");

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        // The key was present, so the value is Some.
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Object(map) => {
                visitor.visit_seq(SeqDeserializer::new(map.into_iter().map(|(_, v)| v)))
            }
            Value::String(_) => Err(Error::unsupported("cannot read a string as a sequence")),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(_) => Err(Error::unsupported(
                "only unit enum variants can be read from VDF",
            )),
        }
    }

    forward_to_deserialize_any! {
        char str string bytes byte_buf map struct identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Document {
        app: App,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct App {
        appid: u32,
        name: String,
        installed: bool,
        size: f64,
        build: Option<i64>,
    }

    #[test]
    fn test_stringly_scalars() {
        let doc: Document = from_str(
            r#"
            app
            {
                appid     440
                name      "Team Fortress 2"
                installed 1
                size      23.5
                build     -12
            }
            "#,
        )
        .unwrap();

        assert_eq!(
            doc.app,
            App {
                appid: 440,
                name: "Team Fortress 2".to_string(),
                installed: true,
                size: 23.5,
                build: Some(-12),
            }
        );
    }

    #[test]
    fn test_missing_option_is_none() {
        #[derive(Deserialize)]
        struct Doc {
            root: Inner,
        }
        #[derive(Deserialize)]
        struct Inner {
            present: String,
            #[serde(default)]
            absent: Option<String>,
        }

        let doc: Doc = from_str(r#"root { present yes }"#).unwrap();
        assert_eq!(doc.root.present, "yes");
        assert_eq!(doc.root.absent, None);
    }

    #[test]
    fn test_index_keyed_object_as_vec() {
        #[derive(Deserialize)]
        struct Doc {
            root: Inner,
        }
        #[derive(Deserialize)]
        struct Inner {
            tags: Vec<String>,
        }

        let doc: Doc = from_str(r#"root { tags { "0" alpha "1" beta "2" gamma } }"#).unwrap();
        assert_eq!(doc.root.tags, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_unit_enum_variant() {
        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "lowercase")]
        enum Mode {
            Casual,
            Competitive,
        }
        #[derive(Deserialize)]
        struct Doc {
            root: Inner,
        }
        #[derive(Deserialize)]
        struct Inner {
            mode: Mode,
        }

        let doc: Doc = from_str(r#"root { mode competitive }"#).unwrap();
        assert_eq!(doc.root.mode, Mode::Competitive);
    }

    #[test]
    fn test_bad_number_reports_value() {
        #[derive(Deserialize, Debug)]
        struct Doc {
            #[allow(dead_code)]
            root: Inner,
        }
        #[derive(Deserialize, Debug)]
        struct Inner {
            #[allow(dead_code)]
            appid: u32,
        }

        let err = from_str::<Doc>(r#"root { appid not-a-number }"#).unwrap_err();
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn test_object_where_scalar_expected() {
        let value = Value::Object(crate::VdfMap::new());
        let err = from_value::<i32>(value).unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
