//! Read typed values back out of a parsed map.
//!
//! Run with: cargo run --example typed_access

use serde_ilcf::{parse_str, Error};

const CONFIG: &str = "\
cache
\tenabled = true
\tttl = 300
\tratio = 0.85
\tmode = L
\texpires = 2030-01-01T00:00:00Z
";

fn main() -> Result<(), Error> {
    let map = parse_str(CONFIG)?;

    println!("enabled: {}", map.get_bool("cache_enabled")?);
    println!("ttl:     {}", map.get_i32("cache_ttl")?);
    println!("ratio:   {}", map.get_f64("cache_ratio")?);
    println!("mode:    {}", map.get_char("cache_mode")?);
    println!("expires: {}", map.get_datetime("cache_expires")?);

    // Absent keys are errors, not placeholders
    match map.get_i32("cache_size") {
        Err(err) if err.is_not_found() => println!("cache_size: {}", err),
        other => println!("unexpected: {:?}", other),
    }

    // So is text that does not fit the requested type
    if let Err(err) = map.get_i32("cache_mode") {
        println!("cache_mode as i32: {}", err);
    }

    Ok(())
}
