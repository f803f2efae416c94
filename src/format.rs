//! ILCF Format Reference
//!
//! This module documents the Indented Line Configuration Format as
//! implemented by this library. It contains no code.
//!
//! # Overview
//!
//! ILCF is line oriented. Each line is read on its own, in file order, and
//! either assigns a value, opens a namespace, or is ignored. The result is a
//! single flat map from string keys to string values.
//!
//! # Line Types
//!
//! | Line (after leading tabs) | Meaning |
//! |---------------------------|---------|
//! | *(empty or whitespace)* | Ignored |
//! | `# text` | Comment, ignored |
//! | `name = value` | Assignment |
//! | `name = value # text` | Assignment with trailing comment |
//! | `name` | Label: opens a namespace, stores nothing |
//! | `- ...` | Ordered-sequence element marker |
//! | `* ...` | Associative-block element marker |
//!
//! ## Assignments
//!
//! The first `=` separates name from value. Both sides are trimmed, so
//! `a=1`, `a = 1` and `a   =   1` are equivalent. Later `=` characters belong
//! to the value: `url = a=b` stores `a=b`.
//!
//! Names and values may be empty. `= 5` stores `5` under the empty name and
//! `key =` stores an empty string. Assigning the same key twice keeps the
//! last value.
//!
//! ## Comments
//!
//! A `#` starts a comment that runs to the end of the line, unless it is
//! written `\#`, which stands for a literal `#` in the value:
//!
//! ```text
//! color = \#ff0000   # red
//! ```
//!
//! stores `#ff0000` under `color`.
//!
//! # Indentation
//!
//! Depth is the number of leading **tab** characters. Spaces never count as
//! indentation.
//!
//! Every assignment and label pushes its name as a namespace level. A line
//! at depth `n` sees the names of the most recent lines at depths
//! `0..n` as its prefix, and its key is that prefix joined with `_`:
//!
//! ```text
//! a = 1
//! 	b = 2
//! 	c = 3
//! d = 4
//! ```
//!
//! produces `a = 1`, `a_b = 2`, `a_c = 3`, `d = 4`.
//!
//! A line may be at most one tab deeper than the cascade line before it.
//! Going back out to any shallower depth is always allowed. A deeper jump is
//! an indentation error that stops the parse:
//!
//! ```text
//! x = 1
//! 		y = 2      # error: two levels deeper than `x`
//! ```
//!
//! Blank lines, comment lines and list element lines do not change the
//! namespace.
//!
//! # List Elements
//!
//! Lines starting with `-` (ordered sequence) or `*` (associative block) are
//! recognized and consumed. Their contents are not stored in the map.
//!
//! # Encoding
//!
//! Input is UTF-8 text separated by `\n` or `\r\n`.
