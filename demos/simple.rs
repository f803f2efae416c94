//! Parse an ILCF document into its flat key/value map.
//!
//! Run with: cargo run --example simple

use serde_ilcf::parse_str;
use std::error::Error;

const CONFIG: &str = "\
# application settings
name = inventory
server
\thost = 127.0.0.1
\tport = 8080   # default port
\tlimits
\t\tconnections = 512
color = \\#00aaff
";

fn main() -> Result<(), Box<dyn Error>> {
    let map = parse_str(CONFIG)?;

    println!("Flattened entries:");
    for (key, value) in &map {
        println!("  {} = {}", key, value);
    }

    assert_eq!(map.get("server_limits_connections")?, "512");
    assert_eq!(map.get("color")?, "#00aaff");
    println!("✓ Nested keys flattened");

    Ok(())
}
