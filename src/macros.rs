/// Builds an [`IlcfMap`](crate::IlcfMap) from `key => value` pairs.
///
/// Keys and values may be any expression implementing `ToString`.
///
/// # Examples
///
/// ```rust
/// use serde_ilcf::{ilcf_map, parse_str};
///
/// let expected = ilcf_map! {
///     "a" => "1",
///     "a_b" => 2,
/// };
/// assert_eq!(parse_str("a = 1\n\tb = 2").unwrap(), expected);
/// ```
#[macro_export]
macro_rules! ilcf_map {
    () => {
        $crate::IlcfMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::IlcfMap::new();
        $(
            map.insert($key.to_string(), $value.to_string());
        )+
        map
    }};
}
