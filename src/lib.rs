//! # serde_ilcf
//!
//! A parser for ILCF (Indented Line Configuration Format), a tab-indented
//! configuration format that flattens into a single key/value map.
//!
//! ## What is ILCF?
//!
//! ILCF files are plain lines of `name = value`. Nesting is expressed only
//! through leading tabs: every line opens a namespace for the lines indented
//! one tab deeper beneath it, and nested names are joined with `_`.
//!
//! ```text
//! name = api              # name = "api"
//! server                  # label: opens "server", stores nothing
//! 	host = localhost    # server_host = "localhost"
//! 	port = 8080         # server_port = "8080"
//! color = \#336699        # color = "#336699"
//! ```
//!
//! ## Key Features
//!
//! - **Flat Output**: Every value lands in one [`IlcfMap`] under its flattened key
//! - **Strict Indentation**: Jumping more than one level deeper is an error, never a guess
//! - **Typed Access**: Convert stored strings with explicit not-found and conversion errors
//! - **Serde Compatible**: Deserialize `#[derive(Deserialize)]` structs straight from the map
//! - **Line at a Time**: Drive a [`Parser`] yourself from any line source
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_ilcf::parse_str;
//!
//! let map = parse_str("a = 1\n\tb = 2\n\tc = 3\nd = 4").unwrap();
//!
//! assert_eq!(map.get("a_b").unwrap(), "2");
//! assert_eq!(map.get_i32("d").unwrap(), 4);
//! assert!(map.get("a_d").unwrap_err().is_not_found());
//! ```
//!
//! ### Deserializing Structs
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
//! let text = "name = api\nserver\n\thost = localhost\n\tport = 8080";
//! let config: Config = from_str(text).unwrap();
//! assert_eq!(config.server, Server { host: "localhost".to_string(), port: 8080 });
//! ```
//!
//! ### Line at a Time
//!
//! ```rust
//! use serde_ilcf::Parser;
//!
//! let mut parser = Parser::new();
//! for line in ["db", "\tuser = admin # default account"] {
//!     parser.process_line(line).unwrap();
//! }
//! assert_eq!(parser.finish().get("db_user").unwrap(), "admin");
//! ```
//!
//! ## Format Reference
//!
//! See the [`format`] module for the complete grammar.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::IlcfMap;
pub use options::ParseOptions;
pub use parser::{LineKind, Parser};
pub use value::FromValue;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::{self, BufRead};

/// Parse ILCF text into a flat map.
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::parse_str;
///
/// let map = parse_str("x=1 # comment").unwrap();
/// assert_eq!(map.get("x").unwrap(), "1");
/// ```
///
/// # Errors
///
/// Returns [`Error::Indentation`] if a line is indented more than one level
/// deeper than the line above it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(s: &str) -> Result<IlcfMap> {
    parse_str_with_options(s, ParseOptions::default())
}

/// Parse ILCF text into a flat map with custom options.
///
/// # Errors
///
/// Returns [`Error::Indentation`] on an indentation jump.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(s: &str, options: ParseOptions) -> Result<IlcfMap> {
    let mut parser = Parser::with_options(options);
    parser.process_lines(s.lines())?;
    Ok(parser.finish())
}

/// Parse ILCF from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text has an
/// indentation jump.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<IlcfMap> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    parse_str(s)
}

/// Parse ILCF from an I/O stream, one line at a time.
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::parse_reader;
/// use std::io::Cursor;
///
/// let map = parse_reader(Cursor::new(b"a\n\tb = 2")).unwrap();
/// assert_eq!(map.get("a_b").unwrap(), "2");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Indentation`] on an
/// indentation jump.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(reader: R) -> Result<IlcfMap>
where
    R: io::Read,
{
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Parse ILCF from an I/O stream with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Indentation`] on an
/// indentation jump.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader_with_options<R>(reader: R, options: ParseOptions) -> Result<IlcfMap>
where
    R: io::Read,
{
    let mut parser = Parser::with_options(options);
    for line in io::BufReader::new(reader).lines() {
        let line = line.map_err(|e| Error::io(&e.to_string()))?;
        parser.process_line(&line)?;
    }
    Ok(parser.finish())
}

/// Deserialize an instance of type `T` from a parsed map.
///
/// Borrowed string fields point into the map.
///
/// # Errors
///
/// Returns [`Error::KeyNotFound`] for missing required fields and
/// [`Error::Conversion`] for values that do not fit their field type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_map<'a, T>(map: &'a IlcfMap) -> Result<T>
where
    T: Deserialize<'a>,
{
    T::deserialize(Deserializer::from_map(map))
}

/// Deserialize an instance of type `T` from ILCF text.
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text fails to parse or cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_map(&parse_str(s)?)
}

/// Deserialize an instance of type `T` from ILCF text parsed with custom
/// options. Struct fields are resolved with the options' separator.
///
/// # Errors
///
/// Returns an error if the text fails to parse or cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: ParseOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let separator = options.separator.clone();
    let map = parse_str_with_options(s, options)?;
    T::deserialize(Deserializer::with_separator(&map, &separator))
}

/// Deserialize an instance of type `T` from an I/O stream of ILCF parsed
/// with custom options.
///
/// # Errors
///
/// Returns an error if reading fails, the text fails to parse, or it cannot
/// be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(reader: R, options: ParseOptions) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let separator = options.separator.clone();
    let map = parse_reader_with_options(reader, options)?;
    T::deserialize(Deserializer::with_separator(&map, &separator))
}

/// Deserialize an instance of type `T` from bytes of ILCF text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, fail to parse, or
/// cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_map(&parse_slice(v)?)
}

/// Deserialize an instance of type `T` from an I/O stream of ILCF.
///
/// # Errors
///
/// Returns an error if reading fails, the text fails to parse, or it cannot
/// be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_map(&parse_reader(reader)?)
}
