//! Error types for ILCF parsing and value access.
//!
//! ## Error Categories
//!
//! - **Indentation Errors**: a line is indented more than one level deeper than
//!   the line that opened its namespace. Fatal to the parse pass.
//! - **Missing Keys**: a flattened key was looked up but never assigned.
//! - **Conversions**: a stored string does not fit the requested type.
//! - **I/O Errors**: reading the input failed.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ilcf::{parse_str, Error};
//!
//! let result = parse_str("x = 1\n\t\ty = 2");
//! assert!(matches!(result, Err(Error::Indentation { line: 2, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or reading ILCF data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading
    #[error("IO error: {0}")]
    Io(String),

    /// Indentation jumped more than one level
    #[error("Indentation error at line {line}:\n{context}\nFound {found} tabs, at most {max} allowed\nHelp: ILCF nests one tab deeper per level")]
    Indentation {
        line: usize,
        found: usize,
        max: usize,
        context: String,
    },

    /// Lookup of a key that was never assigned
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Stored text does not convert to the requested type
    #[error("Cannot convert value of '{key}' to {expected}: {value:?}")]
    Conversion {
        key: String,
        expected: String,
        value: String,
    },

    /// Shape the flat key/value model cannot represent
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an indentation error for a line that nests too deeply.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::Error;
    ///
    /// let err = Error::indentation(3, 2, 1, "\t\ty = 2");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn indentation(line: usize, found: usize, max: usize, context: &str) -> Self {
        Error::Indentation {
            line,
            found,
            max,
            context: context.to_string(),
        }
    }

    /// Creates a key-not-found error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::Error;
    ///
    /// let err = Error::key_not_found("server_port");
    /// assert_eq!(err.to_string(), "Key not found: server_port");
    /// ```
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a conversion error carrying the raw text that failed to convert.
    pub fn conversion(key: &str, expected: &str, value: &str) -> Self {
        Error::Conversion {
            key: key.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while looking up an absent key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Error::KeyNotFound(field.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
