//! The cascade parser.
//!
//! ILCF expresses hierarchy through leading tabs only. The parser keeps a
//! stack of the names that opened each active indentation level and, for every
//! line, trims that stack back to the line's depth before joining it into the
//! prefix of the line's own key:
//!
//! ```text
//! server              # label: opens "server", stores nothing
//!     host = example  # server_host = example
//!     tls             # label: opens "server_tls"
//!         cert = a.pem    # server_tls_cert = a.pem
//!     port = 443      # back to depth 1: server_port = 443
//! name = api          # back to depth 0: name = api
//! ```
//!
//! (Indentation above is drawn with spaces; real input uses tabs.)
//!
//! Lines are processed strictly in order. A line may go at most one level
//! deeper than the cascade line before it; a bigger jump is rejected with
//! [`Error::Indentation`] and ends the pass.

use crate::{Error, IlcfMap, ParseOptions, Result};

/// How a single line was interpreted by [`Parser::process_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// Nothing but a comment.
    Comment,
    /// Ordered-sequence element (`- ...`). Consumed without storing a value.
    SequenceElement,
    /// Associative-block element (`* ...`). Consumed without storing a value.
    BlockElement,
    /// A name without an assignment; opens the namespace `key`.
    Label { key: String },
    /// `name = value`, stored under `key`.
    Assignment { key: String },
}

/// Line-at-a-time ILCF parser.
///
/// A `Parser` owns the prefix stack and the output map for one pass over an
/// input. Feed it lines in file order, then call [`Parser::finish`].
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::{LineKind, Parser};
///
/// let mut parser = Parser::new();
/// parser.process_line("db").unwrap();
/// let kind = parser.process_line("\thost = localhost # primary").unwrap();
/// assert_eq!(kind, LineKind::Assignment { key: "db_host".to_string() });
///
/// let map = parser.finish();
/// assert_eq!(map.get("db_host").unwrap(), "localhost");
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParseOptions,
    prefixes: Vec<String>,
    variables: IlcfMap,
    line: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with the standard options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates a parser with custom delimiters or separator.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Parser {
            options,
            prefixes: Vec::new(),
            variables: IlcfMap::new(),
            line: 0,
        }
    }

    /// Processes one raw line of input.
    ///
    /// Blank and comment-only lines leave all state untouched. List element
    /// lines are recognized and consumed without changing the namespace.
    /// Every other line is a label or an assignment: it sets the namespace
    /// depth from its leading tabs, pushes its own name, and assignments
    /// store their value under the flattened key (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Indentation`] if the line is more than one level
    /// deeper than the line that opened the current namespace. The line is
    /// rejected without changing the prefix stack or the map.
    pub fn process_line(&mut self, raw: &str) -> Result<LineKind> {
        self.line += 1;

        let partial = raw.trim_end();
        let full = partial.trim();

        let kind = match full.chars().next() {
            None => LineKind::Blank,
            Some(ch) if ch == self.options.comment_delimiter => LineKind::Comment,
            Some('-') => LineKind::SequenceElement,
            Some('*') => LineKind::BlockElement,
            Some(_) => self.process_cascade_element(partial, full)?,
        };

        if matches!(kind, LineKind::SequenceElement | LineKind::BlockElement)
            && full[1..].trim().is_empty()
        {
            log::trace!("line {}: discarding empty list element", self.line);
        } else {
            log::trace!("line {}: {:?}", self.line, kind);
        }

        Ok(kind)
    }

    /// Processes every line from `lines` in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Parser::process_line`].
    pub fn process_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref())?;
        }
        Ok(())
    }

    /// The map built so far.
    #[must_use]
    pub fn variables(&self) -> &IlcfMap {
        &self.variables
    }

    /// Names of the currently open namespace levels, outermost first.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Depth of the innermost open namespace: `0` before any cascade line.
    ///
    /// The next cascade line may sit at most at this depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.prefixes.len()
    }

    /// Number of lines processed so far, including blank ones.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Ends the pass and returns the map.
    #[must_use]
    pub fn finish(self) -> IlcfMap {
        log::debug!(
            "parsed {} lines into {} entries",
            self.line,
            self.variables.len()
        );
        self.variables
    }

    fn process_cascade_element(&mut self, partial: &str, full: &str) -> Result<LineKind> {
        let content = match self.comment_start(full) {
            Some(idx) => &full[..idx],
            None => full,
        };

        let delimiter = self.options.assign_delimiter;
        let (name, value) = match content.find(delimiter) {
            Some(idx) => (
                content[..idx].trim(),
                Some(content[idx + delimiter.len_utf8()..].trim()),
            ),
            None => (content.trim(), None),
        };

        self.update_cascade(indent_count(partial), partial)?;
        let key = self.flatten(name);
        self.prefixes.push(name.to_string());

        match value {
            Some(value) => {
                let value = self.unescape(value);
                self.variables.insert(key.clone(), value);
                Ok(LineKind::Assignment { key })
            }
            None => Ok(LineKind::Label { key }),
        }
    }

    fn update_cascade(&mut self, depth: usize, context: &str) -> Result<()> {
        let max = self.prefixes.len();
        if depth > max {
            log::debug!(
                "line {}: indentation of {} exceeds maximum of {}",
                self.line,
                depth,
                max
            );
            return Err(Error::indentation(self.line, depth, max, context));
        }
        self.prefixes.truncate(depth);
        Ok(())
    }

    fn flatten(&self, name: &str) -> String {
        if self.prefixes.is_empty() {
            return name.to_string();
        }
        let separator = &self.options.separator;
        let mut key = self.prefixes.join(separator);
        key.push_str(separator);
        key.push_str(name);
        key
    }

    /// Byte offset of the first comment delimiter not preceded by the escape.
    fn comment_start(&self, line: &str) -> Option<usize> {
        let mut prev = None;
        for (idx, ch) in line.char_indices() {
            if ch == self.options.comment_delimiter && prev != Some(self.options.escape) {
                return Some(idx);
            }
            prev = Some(ch);
        }
        None
    }

    fn unescape(&self, value: &str) -> String {
        let mut escaped = String::with_capacity(2);
        escaped.push(self.options.escape);
        escaped.push(self.options.comment_delimiter);
        value.replace(&escaped, &self.options.comment_delimiter.to_string())
    }
}

fn indent_count(line: &str) -> usize {
    line.chars().take_while(|&ch| ch == '\t').count()
}
