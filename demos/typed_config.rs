//! Reading a hand-written config file into Rust types with serde.
//!
//! Run with: cargo run --example typed_config

use serde::{Deserialize, Serialize};
use std::error::Error;
use termpose::{from_str, to_string};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Listener {
    host: String,
    port: u16,
    tls: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    level: Level,
    listeners: Vec<Listener>,
    admins: Vec<String>,
    banner: Option<String>,
}

const CONFIG: &str = "\
name \"edge proxy\"
level Info
listeners
  (host 0.0.0.0) (port 80) (tls no)
  (host 0.0.0.0) (port 443) (tls yes)
admins alice bob
banner \"
  Authorized use only.
  Sessions are logged.
";

fn main() -> Result<(), Box<dyn Error>> {
    let config: Config = from_str(CONFIG)?;
    println!("Parsed:\n{:#?}\n", config);

    let text = to_string(&config)?;
    println!("Written back:\n{}", text);

    let again: Config = from_str(&text)?;
    assert_eq!(config, again);
    println!("✓ Round-trip successful");

    match from_str::<Config>("name x\nlevel Loud\nlisteners\nadmins\nbanner") {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("\nRejected as expected: {}", err),
    }

    Ok(())
}
