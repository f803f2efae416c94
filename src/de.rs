//! Deserialization from a parsed [`IlcfMap`].
//!
//! The map is flat, so structure is recovered from key prefixes: a struct
//! field `port` inside a field `server` is read from the key `server_port`.
//! Every stored value is a string; scalars are converted on demand with the
//! same rules as the typed accessors (see [`FromValue`]).
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_ilcf::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16 }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { name: String, server: Server }
//!
//! let config: Config = from_str("name = api\nserver\n\thost = local\n\tport = 80").unwrap();
//! assert_eq!(config.server.port, 80);
//! ```
//!
//! ## Supported Shapes
//!
//! - Structs, nested structs and newtype structs
//! - Scalars parsed from text (integers, floats, `bool`, `char`, strings)
//! - `Option<T>`: `None` when neither the key nor anything beneath it exists
//! - Maps: every key beneath the prefix, with the prefix removed
//! - Unit enum variants named by the value
//!
//! Sequences have no representation in the flat map and are rejected with
//! [`Error::UnsupportedType`].

use crate::value::FromValue;
use crate::{Error, IlcfMap, Result};
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, IntoDeserializer};

/// Deserializer over one node of the flattened namespace.
///
/// The root node has an empty key and no value of its own; every other node
/// may have a value, children (keys that extend it with the separator), or
/// both.
pub struct Deserializer<'de> {
    map: &'de IlcfMap,
    key: String,
    separator: String,
    /// Keys of sibling struct fields that extend this key, such as
    /// `max_size` for a field `max`. Keys beneath them are not children.
    claimed: Vec<String>,
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.parse::<$ty>()?)
            }
        )*
    };
}

impl<'de> Deserializer<'de> {
    /// Creates a deserializer over the whole map, using the `_` separator.
    pub fn from_map(map: &'de IlcfMap) -> Self {
        Self::with_separator(map, "_")
    }

    /// Creates a deserializer over a map flattened with a custom separator.
    pub fn with_separator(map: &'de IlcfMap, separator: &str) -> Self {
        Deserializer {
            map,
            key: String::new(),
            separator: separator.to_string(),
            claimed: Vec::new(),
        }
    }

    fn child(&self, name: &str) -> Self {
        Deserializer {
            map: self.map,
            key: format!("{}{}", self.child_prefix(), name),
            separator: self.separator.clone(),
            claimed: self.claimed.clone(),
        }
    }

    /// The node of struct field `name`, with the keys of any sibling field
    /// whose name extends it excluded from its children.
    fn field(&self, name: &str, fields: &[&str]) -> Self {
        let mut node = self.child(name);
        let own = format!("{}{}", name, self.separator);
        let prefix = self.child_prefix();
        node.claimed.extend(
            fields
                .iter()
                .filter(|other| other.starts_with(own.as_str()))
                .map(|other| format!("{}{}", prefix, other)),
        );
        node
    }

    fn is_claimed(&self, key: &str) -> bool {
        self.claimed.iter().any(|claimed| {
            key.strip_prefix(claimed.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(self.separator.as_str()))
        })
    }

    fn child_prefix(&self) -> String {
        if self.key.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.key, self.separator)
        }
    }

    fn value(&self) -> Option<&'de str> {
        if self.key.is_empty() {
            None
        } else {
            self.map.lookup(&self.key)
        }
    }

    fn has_children(&self) -> bool {
        if self.key.is_empty() {
            !self.map.is_empty()
        } else if self.claimed.is_empty() {
            self.map.has_prefix(&self.child_prefix())
        } else {
            let prefix = self.child_prefix();
            self.map
                .keys()
                .any(|k| k.starts_with(prefix.as_str()) && !self.is_claimed(k))
        }
    }

    fn exists(&self) -> bool {
        self.value().is_some() || self.has_children()
    }

    fn raw(&self) -> Result<&'de str> {
        self.value().ok_or_else(|| Error::key_not_found(&self.key))
    }

    fn parse<T: FromValue>(&self) -> Result<T> {
        let raw = self.raw()?;
        T::from_value(raw).ok_or_else(|| Error::conversion(&self.key, T::EXPECTED, raw))
    }

    fn entries(&self) -> EntriesAccess<'de> {
        let prefix = self.child_prefix();
        let keys: Vec<&'de str> = self
            .map
            .iter()
            .filter(|(k, _)| !self.is_claimed(k))
            .filter_map(|(k, _)| k.strip_prefix(prefix.as_str()))
            .collect();
        EntriesAccess {
            parent: self.child(""),
            keys: keys.into_iter(),
            current: None,
        }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if let Some(raw) = self.value() {
            visitor.visit_borrowed_str(raw)
        } else if self.has_children() {
            visitor.visit_map(self.entries())
        } else {
            Err(Error::key_not_found(&self.key))
        }
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool(bool),
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
        deserialize_char => visit_char(char),
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.raw()?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.raw()?.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.exists() {
            visitor.visit_some(self)
        } else {
            visitor.visit_none()
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type(&format!(
            "sequence at '{}': list elements are not stored in the flat map",
            self.key
        )))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
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
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(self.entries())
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let present: Vec<&'static str> = fields
            .iter()
            .copied()
            .filter(|field| self.field(field, fields).exists())
            .collect();
        let prefix = self.child_prefix();
        visitor
            .visit_map(StructAccess {
                parent: self,
                all: fields,
                fields: present.into_iter(),
                current: None,
            })
            .map_err(|err| match err {
                // `missing_field` only knows the bare field name.
                Error::KeyNotFound(name) if fields.iter().any(|field| *field == name) => {
                    Error::KeyNotFound(format!("{}{}", prefix, name))
                }
                other => other,
            })
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let raw = self.raw()?;
        visitor.visit_enum(IntoDeserializer::<'de, Error>::into_deserializer(raw))
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// Visits the declared fields of a struct that have a value or children.
struct StructAccess<'de> {
    parent: Deserializer<'de>,
    all: &'static [&'static str],
    fields: std::vec::IntoIter<&'static str>,
    current: Option<&'static str>,
}

impl<'de> de::MapAccess<'de> for StructAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.fields.next() {
            Some(field) => {
                self.current = Some(field);
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(field))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.current.take() {
            Some(field) => seed.deserialize(self.parent.field(field, self.all)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.len())
    }
}

/// Visits every key beneath a prefix, yielding keys relative to it.
struct EntriesAccess<'de> {
    parent: Deserializer<'de>,
    keys: std::vec::IntoIter<&'de str>,
    current: Option<&'de str>,
}

impl<'de> de::MapAccess<'de> for EntriesAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.keys.next() {
            Some(key) => {
                self.current = Some(key);
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(key))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.current.take() {
            Some(key) => seed.deserialize(Deserializer {
                map: self.parent.map,
                key: format!("{}{}", self.parent.key, key),
                separator: self.parent.separator.clone(),
                claimed: self.parent.claimed.clone(),
            }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.keys.len())
    }
}
