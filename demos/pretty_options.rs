//! The four renderings, and the pretty printer settings.
//!
//! Run with: cargo run --example pretty_options

use std::error::Error;
use termpose::{parse_term, write_pretty_to, Indent, LineEnding, PrettyOptions};

const SOURCE: &str = "\
pipeline
  stage build (run \"cargo build --release\") (cache target)
  stage test (run \"cargo test\") (needs build)
  stage deploy (run ./deploy.sh) (needs build test) (when: branch main)
";

fn main() -> Result<(), Box<dyn Error>> {
    let term = parse_term(SOURCE)?;

    println!("Canonical:\n{}\n", term.to_canonical_string());
    println!("Compact:\n{}\n", term.to_compact_string());
    println!("JSON:\n{}\n", term.to_json_string());

    println!("Pretty (defaults):");
    print!("{}", term.to_pretty_string(&PrettyOptions::default()));

    println!("\nPretty (width 30, 4 spaces):");
    let narrow = PrettyOptions::new().with_max_width(30).with_indent(4);
    print!("{}", term.to_pretty_string(&narrow));

    println!("\nPretty (width 30, tabs, CRLF) written to a buffer:");
    let tabs = PrettyOptions::new()
        .with_max_width(30)
        .with_tabs()
        .with_line_ending(LineEnding::CrLf);
    assert_eq!(tabs.indent, Indent::Tab);
    let mut buffer = Vec::new();
    write_pretty_to(&mut buffer, &term, &tabs)?;
    let crlf = buffer.windows(2).filter(|w| *w == b"\r\n").count();
    println!("{} bytes, {} CRLF line endings", buffer.len(), crlf);
    print!("{}", String::from_utf8(buffer)?);

    Ok(())
}
