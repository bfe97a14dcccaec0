//! Parsing a Termpose document and walking the tree.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use termpose::{parse_document, Term};

const DOCUMENT: &str = "\
character
  name \"Ada Lovelace\"
  class: analyst engineer
  stats
    wit 18
    patience 12
  inventory notebook(pages:200) lamp
";

fn describe(term: &Term, depth: usize) {
    let pad = "  ".repeat(depth);
    match term {
        Term::Atom(atom) => println!("{pad}atom {:?} at {}", atom.value, atom.pos),
        Term::Seq(seq) => {
            println!("{pad}seq of {} at {}", seq.len(), seq.pos);
            for item in seq {
                describe(item, depth + 1);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse_document(DOCUMENT)?;
    let character = &doc.items[0];

    println!("Canonical:\n{}\n", character);
    println!("Compact:\n{}\n", character.to_compact_string());

    println!("Tree:");
    describe(character, 0);

    if let Some(name) = character.find("name").and_then(|t| t.tail().first()) {
        println!("\nName: {}", name.as_str().unwrap_or("?"));
    }
    if let Some(stats) = character.find("stats") {
        for stat in stats.tail() {
            println!("{}: {}", stat.initial_str(), stat.tail()[0]);
        }
    }

    match parse_document("broken)\n") {
        Ok(_) => println!("\nunexpectedly parsed"),
        Err(err) => println!("\nRejected as expected: {}", err),
    }

    Ok(())
}
