//! Building terms with the term! macro.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use termpose::{parse_term, term, PrettyOptions, Term};

fn main() -> Result<(), Box<dyn Error>> {
    let atom = term!(hello);
    let quoted = term!("hello world");
    let number = term!(42);
    let empty = term!(());

    println!("Atoms and empties:");
    println!("  ident:  {}", atom);
    println!("  string: {}", quoted);
    println!("  number: {}", number);
    println!("  empty:  {}\n", empty);

    let host = "db.internal";
    let replicas: Vec<Term> = (1..=3).map(|i| Term::from(format!("replica-{i}"))).collect();

    let config = term!(database
        (host {host})
        (port 5432)
        (replicas {replicas})
        (options (pool 16) (timeout "30 s")));

    println!("Canonical:\n{}\n", config);
    println!(
        "Pretty:\n{}",
        config.to_pretty_string(&PrettyOptions::new().with_max_width(40))
    );

    let parsed = parse_term(&config.to_canonical_string())?;
    assert_eq!(parsed, config);
    println!("✓ Macro output reads back unchanged");

    Ok(())
}
