//! # termpose
//!
//! A parser and renderer for Termpose, a whitespace-sensitive notation for
//! trees of symbols, with a Serde bridge.
//!
//! ## What is Termpose?
//!
//! Termpose writes S-expression shaped data without most of the
//! parentheses. A term is either an **atom** (a string) or a **sequence** of
//! terms. Sequences come from lines, indentation, parens, and two pieces of
//! sugar: `a(b c)` and `a:b`.
//!
//! ```text
//! server
//!   host example.org
//!   ports 80 443
//!   motd "
//!     welcome
//!     be nice
//! ```
//!
//! reads as `(server (host example.org) (ports 80 443) (motd "welcome\nbe nice"))`.
//! The [`syntax`] module describes the notation in full.
//!
//! ## Key Features
//!
//! - **Positions**: every parsed term remembers its line and column
//! - **Four renderings**: canonical, compact, pretty (indented) and JSON
//! - **Serde Compatible**: derive `Serialize`/`Deserialize` and read or write
//!   documents directly
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use termpose::parse_term;
//!
//! let term = parse_term("sword\n  damage 4\n  name \"Old Faithful\"").unwrap();
//! assert_eq!(term.initial_str(), "sword");
//! assert_eq!(term.find("damage").unwrap().tail()[0].as_str(), Some("4"));
//! assert_eq!(term.to_compact_string(), "sword(damage:4 name:\"Old Faithful\")");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use termpose::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Ada Lovelace".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id 123\nname \"Ada Lovelace\"\nactive true\n");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Building terms
//!
//! ```rust
//! use termpose::{term, PrettyOptions};
//!
//! let t = term!(config (name demo) (ports 80 443));
//! assert_eq!(t.to_pretty_string(&PrettyOptions::default()), "config name:demo ports(80 443)\n");
//! ```
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parsing a document and walking the tree
//! - **`macro.rs`** - building terms with the `term!` macro
//! - **`pretty_options.rs`** - the renderings and pretty printer settings
//! - **`typed_config.rs`** - reading a config file into Rust types
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod macros;
pub mod options;
pub mod parser;
pub mod render;
pub mod ser;
pub mod syntax;
pub mod term;

pub use de::{from_document, from_term, Deserializer};
pub use error::{Error, Result};
pub use options::{Indent, LineEnding, PrettyOptions};
pub use parser::Parser;
pub use ser::{to_term, TermSerializer};
pub use term::{Atom, Position, Seq, Term};

use serde::{de::DeserializeOwned, Serialize};
use std::io;

/// Parses a Termpose document into its root sequence.
///
/// Every top-level line (with the lines indented under it) becomes one item
/// of the returned sequence.
///
/// # Examples
///
/// ```rust
/// use termpose::parse_document;
///
/// let doc = parse_document("a b\nc\n  d").unwrap();
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.items[1].to_string(), "(c d)");
/// ```
///
/// # Errors
///
/// Returns the first structural, indentation or string literal error, with
/// its line and column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_document(text: &str) -> Result<Seq> {
    Parser::new().parse(text.chars())
}

/// Parses a Termpose document that holds a single term.
///
/// A document with exactly one top-level term returns that term; otherwise
/// the whole document is returned as a sequence.
///
/// # Examples
///
/// ```rust
/// use termpose::{parse_term, Term};
///
/// assert_eq!(parse_term("foo bar baz").unwrap().to_string(), "(foo bar baz)");
/// assert_eq!(parse_term("a\nb").unwrap().to_string(), "(a b)");
/// assert_eq!(parse_term("").unwrap(), Term::seq(vec![]));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_term(text: &str) -> Result<Term> {
    let mut doc = parse_document(text)?;
    if doc.items.len() == 1 {
        if let Some(only) = doc.items.pop() {
            return Ok(only);
        }
    }
    Ok(Term::Seq(doc))
}

/// Reads a whole document from an I/O stream and parses it.
///
/// # Examples
///
/// ```rust
/// use termpose::parse_reader;
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"x 1\ny 2")).unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Seq> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_document(&text)
}

/// Pretty prints a term to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use termpose::{term, write_pretty_to, PrettyOptions};
///
/// let mut buffer = Vec::new();
/// write_pretty_to(&mut buffer, &term!(a b), &PrettyOptions::default()).unwrap();
/// assert_eq!(buffer, b"a b\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_pretty_to<W: io::Write>(
    mut writer: W,
    term: &Term,
    options: &PrettyOptions,
) -> Result<()> {
    writer.write_all(term.to_pretty_string(options).as_bytes())?;
    Ok(())
}

/// Serializes any `T: Serialize` to a Termpose document.
///
/// A value that becomes a sequence is written one item per line: struct
/// fields and map entries as `key value` lines, collection elements one per
/// line. Anything else is written as a single line.
///
/// # Examples
///
/// ```rust
/// use termpose::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x 1\ny 2\n");
/// assert_eq!(to_string(&vec!["a", "b c"]).unwrap(), "a\n\"b c\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let doc = match to_term(value)? {
        Term::Seq(seq) => seq,
        atom @ Term::Atom(_) => Seq::new(vec![atom]),
    };
    let mut out = String::new();
    render::write_lines(&mut out, &doc).map_err(|e| Error::custom(e.to_string()))?;
    Ok(out)
}

/// Serializes any `T: Serialize` to a writer as a Termpose document.
///
/// # Examples
///
/// ```rust
/// use termpose::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &(1, 2)).unwrap();
/// assert_eq!(buffer, b"1\n2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Deserializes an instance of type `T` from a Termpose document.
///
/// # Examples
///
/// ```rust
/// use termpose::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x 1\ny 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
///
/// let n: u8 = from_str("7").unwrap();
/// assert_eq!(n, 7);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a valid document or does not have
/// the shape `T` expects. Both carry line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let doc = parse_document(s)?;
    from_document(&doc)
}

/// Deserializes an instance of type `T` from an I/O stream of Termpose.
///
/// # Examples
///
/// ```rust
/// use termpose::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x 1\ny 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not a valid document, or
/// it cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let doc = parse_reader(reader)?;
    from_document(&doc)
}
