//! Typed conversions for stored ILCF values.
//!
//! The parser stores every value as a string. [`FromValue`] turns that text
//! into a typed value at the access boundary, returning `None` when the text
//! does not fit so the caller can report which key failed.
//!
//! ## Supported Types
//!
//! | Type | Accepted text |
//! |------|---------------|
//! | Integers | Decimal digits with optional sign (`42`, `-7`) |
//! | Floats | Anything `str::parse` accepts (`3.14`, `1e-6`, `inf`) |
//! | `bool` | `true` or `false`, any letter case |
//! | `char` | Exactly one character |
//! | `String` | Anything |
//! | `DateTime<Utc>` | RFC 3339 (`2024-01-15T10:30:00Z`) |
//! | `BigInt` | Decimal digits of any length |
//!
//! ## Examples
//!
//! ```rust
//! use serde_ilcf::FromValue;
//!
//! assert_eq!(i32::from_value("42"), Some(42));
//! assert_eq!(bool::from_value("TRUE"), Some(true));
//! assert_eq!(bool::from_value("yes"), None);
//! ```

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// Conversion from the raw text of a stored value.
pub trait FromValue: Sized {
    /// Human-readable name of the target type, used in conversion errors.
    const EXPECTED: &'static str;

    /// Converts `raw`, or returns `None` if the text does not fit.
    fn from_value(raw: &str) -> Option<Self>;
}

macro_rules! from_value_via_parse {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

from_value_via_parse!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize, f32, f64);

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl FromValue for char {
    const EXPECTED: &'static str = "char";

    fn from_value(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromValue for DateTime<Utc> {
    const EXPECTED: &'static str = "RFC 3339 date";

    fn from_value(raw: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl FromValue for BigInt {
    const EXPECTED: &'static str = "big integer";

    fn from_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_integers() {
        assert_eq!(i32::from_value("-17"), Some(-17));
        assert_eq!(u8::from_value("256"), None);
        assert_eq!(i64::from_value("1.5"), None);
        assert_eq!(i32::from_value(""), None);
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_value("2.5"), Some(2.5));
        assert_eq!(f32::from_value("1e3"), Some(1000.0));
        assert_eq!(f64::from_value("abc"), None);
    }

    #[test]
    fn test_bool() {
        assert_eq!(bool::from_value("true"), Some(true));
        assert_eq!(bool::from_value("False"), Some(false));
        assert_eq!(bool::from_value("1"), None);
    }

    #[test]
    fn test_char() {
        assert_eq!(char::from_value("x"), Some('x'));
        assert_eq!(char::from_value("é"), Some('é'));
        assert_eq!(char::from_value(""), None);
        assert_eq!(char::from_value("xy"), None);
    }

    #[test]
    fn test_datetime() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            DateTime::<Utc>::from_value("2024-01-15T10:30:00Z"),
            Some(expected)
        );
        assert_eq!(
            DateTime::<Utc>::from_value("2024-01-15T12:30:00+02:00"),
            Some(expected)
        );
        assert_eq!(DateTime::<Utc>::from_value("yesterday"), None);
    }

    #[test]
    fn test_bigint() {
        let big = BigInt::from_value("123456789012345678901234567890").unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert_eq!(BigInt::from_value("12a"), None);
    }
}
