//! Configuration options for the ILCF parser.
//!
//! The defaults describe the standard format: `=` assigns, `#` starts a
//! comment, `\#` escapes a literal `#`, and nested names are joined with `_`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ilcf::{parse_str_with_options, ParseOptions};
//!
//! let options = ParseOptions::new().with_separator(".");
//! let map = parse_str_with_options("server\n\tport = 80", options).unwrap();
//! assert_eq!(map.get("server.port").unwrap(), "80");
//! ```

/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_assign_delimiter(':')
///     .with_comment_delimiter(';');
/// assert_eq!(options.separator, "_");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub separator: String,
    pub assign_delimiter: char,
    pub comment_delimiter: char,
    pub escape: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            separator: "_".to_string(),
            assign_delimiter: '=',
            comment_delimiter: '#',
            escape: '\\',
        }
    }
}

impl ParseOptions {
    /// Creates the standard options (`=`, `#`, `\`, `_`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ilcf::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.assign_delimiter, '=');
    /// assert_eq!(options.comment_delimiter, '#');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string placed between flattened key segments.
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Sets the character separating a name from its value.
    #[must_use]
    pub fn with_assign_delimiter(mut self, delimiter: char) -> Self {
        self.assign_delimiter = delimiter;
        self
    }

    /// Sets the character that starts an inline comment.
    #[must_use]
    pub fn with_comment_delimiter(mut self, delimiter: char) -> Self {
        self.comment_delimiter = delimiter;
        self
    }

    /// Sets the character that, placed right before the comment delimiter,
    /// makes it literal.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }
}
