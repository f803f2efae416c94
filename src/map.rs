//! The flat key/value map produced by a parse pass.
//!
//! [`IlcfMap`] wraps an [`IndexMap`] of flattened keys to string values. Keys
//! encode the whole hierarchy (`server_port`), so no nested structure is ever
//! stored. Insertion order is kept so iteration and serialized output follow
//! the order of the source file.
//!
//! Lookups go through the typed accessor methods, which report an absent key
//! as [`Error::KeyNotFound`] instead of a placeholder value.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ilcf::parse_str;
//!
//! let map = parse_str("server\n\thost = localhost\n\tport = 8080").unwrap();
//!
//! assert_eq!(map.get_str("server_host").unwrap(), "localhost");
//! assert_eq!(map.get_i32("server_port").unwrap(), 8080);
//! assert!(map.get("server_user").unwrap_err().is_not_found());
//! ```

use crate::value::FromValue;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// An ordered map of flattened keys to string values.
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::IlcfMap;
///
/// let mut map = IlcfMap::new();
/// map.insert("first".to_string(), "1".to_string());
/// map.insert("second".to_string(), "2".to_string());
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IlcfMap(IndexMap<String, String>);

impl IlcfMap {
    /// Creates an empty `IlcfMap`.
    #[must_use]
    pub fn new() -> Self {
        IlcfMap(IndexMap::new())
    }

    /// Creates an empty `IlcfMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IlcfMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::IlcfMap;
    ///
    /// let mut map = IlcfMap::new();
    /// assert!(map.insert("key".to_string(), "1".to_string()).is_none());
    /// assert_eq!(map.insert("key".to_string(), "2".to_string()).as_deref(), Some("1"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key was never assigned.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.lookup(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns the value stored under `key`, or `None` if it is absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Looks up `key` and converts its value to `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::{parse_str, Error};
    ///
    /// let map = parse_str("retries = 3\nname = api").unwrap();
    /// assert_eq!(map.get_as::<u8>("retries").unwrap(), 3);
    /// assert!(matches!(map.get_as::<u8>("name"), Err(Error::Conversion { .. })));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent and
    /// [`Error::Conversion`] if the stored text does not fit `T`.
    pub fn get_as<T: FromValue>(&self, key: &str) -> Result<T> {
        let raw = self.get(key)?;
        T::from_value(raw).ok_or_else(|| Error::conversion(key, T::EXPECTED, raw))
    }

    /// Returns the value under `key` as a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get(key)
    }

    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get_as(key)
    }

    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_as(key)
    }

    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.get_as(key)
    }

    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get_as(key)
    }

    /// Accepts `true` or `false` in any letter case.
    ///
    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_as(key)
    }

    /// The stored value must be exactly one character.
    ///
    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_char(&self, key: &str) -> Result<char> {
        self.get_as(key)
    }

    /// Parses an RFC 3339 timestamp and normalizes it to UTC.
    ///
    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_datetime(&self, key: &str) -> Result<DateTime<Utc>> {
        self.get_as(key)
    }

    /// # Errors
    ///
    /// See [`IlcfMap::get_as`].
    pub fn get_bigint(&self, key: &str) -> Result<BigInt> {
        self.get_as(key)
    }

    /// Returns `true` if `key` was assigned.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns `true` if any key starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.keys().any(|k| k.starts_with(prefix))
    }

    /// Iterates over the entries whose key starts with `prefix`, yielding the
    /// remainder of each key after the prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::parse_str;
    ///
    /// let map = parse_str("db\n\thost = h\n\tport = 5432\nname = app").unwrap();
    /// let db: Vec<_> = map.with_prefix("db_").collect();
    /// assert_eq!(db, vec![("host", "h"), ("port", "5432")]);
    /// ```
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.0.iter().filter_map(move |(k, v)| {
            k.strip_prefix(prefix).map(|rest| (rest, v.as_str()))
        })
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Serialize for IlcfMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<HashMap<String, String>> for IlcfMap {
    fn from(map: HashMap<String, String>) -> Self {
        IlcfMap(map.into_iter().collect())
    }
}

impl From<IlcfMap> for HashMap<String, String> {
    fn from(map: IlcfMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for IlcfMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IlcfMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for IlcfMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        IlcfMap(IndexMap::from_iter(iter))
    }
}
