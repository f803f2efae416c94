//! Deserialize structs directly from ILCF text.
//!
//! Run with: cargo run --example structs

use serde::Deserialize;
use serde_ilcf::from_str;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Database {
    url: String,
    pool_size: u32,
}

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    debug: bool,
    database: Database,
    labels: HashMap<String, String>,
    replica: Option<Database>,
}

const CONFIG: &str = "\
name = orders
debug = false
database
\turl = postgres://localhost/orders
\tpool_size = 8
labels
\tteam = payments
\ttier = critical
";

fn main() -> Result<(), Box<dyn Error>> {
    let config: Config = from_str(CONFIG)?;
    println!("{:#?}", config);

    assert_eq!(config.database.pool_size, 8);
    assert_eq!(config.labels["tier"], "critical");
    assert!(config.replica.is_none());
    println!("✓ Config loaded");

    Ok(())
}
