//! The Termpose notation.
//!
//! This module documents the notation as read by [`parse_document`](crate::parse_document)
//! and written by the renderers in [`render`](crate::render).
//!
//! # Overview
//!
//! A document is a list of terms. A term is either an **atom** (a symbol)
//! or a **sequence** of terms. Sequences can be written three ways, and they
//! mix freely:
//!
//! - explicitly with parens: `(a b c)`
//! - with sugar after a head term: `a(b c)`, `a:b`, `a: b c`
//! - with indentation: lines indented under a line become its children
//!
//! # Lines
//!
//! Each line is a sequence of the terms written on it, separated by spaces
//! or tabs. A line holding a single term is just that term.
//!
//! ```rust
//! use termpose::parse_document;
//!
//! let doc = parse_document("foo bar baz\nqux").unwrap();
//! assert_eq!(doc.items[0].to_string(), "(foo bar baz)");
//! assert_eq!(doc.items[1].to_string(), "qux");
//! ```
//!
//! # Indentation
//!
//! Lines indented deeper than the line above are appended to it. Deeper
//! indentation must repeat the enclosing indentation exactly and add to it,
//! so tabs and spaces cannot be mixed between levels. Dedenting must return
//! to a level that was used before.
//!
//! ```rust
//! use termpose::{parse_term, parse_document, Error};
//!
//! let term = parse_term("a\n  b\n  c").unwrap();
//! assert_eq!(term.to_string(), "(a b c)");
//!
//! let term = parse_term("config\n  name demo\n  ports\n    80\n    443").unwrap();
//! assert_eq!(term.to_string(), "(config (name demo) (ports 80 443))");
//!
//! // Landing between two levels is an error.
//! let err = parse_document("a\n    b\n  c").unwrap_err();
//! assert!(matches!(err, Error::Indentation { line: 3, .. }));
//! ```
//!
//! # Parens
//!
//! `(` opens a sequence and `)` closes it; parens do not continue past the
//! end of a line. A `(` written directly after a term (no space) makes that
//! term the head of the new sequence.
//!
//! ```rust
//! use termpose::parse_term;
//!
//! assert_eq!(parse_term("x(y z)").unwrap().to_string(), "(x y z)");
//! assert_eq!(parse_term("f(a)(b)").unwrap().to_string(), "((f a) b)");
//! assert_eq!(parse_term("(a (b c))").unwrap().to_string(), "(a (b c))");
//! ```
//!
//! # Colons
//!
//! A colon directly after a term pairs it with the next term: `a:b` is
//! `(a b)`, and chains nest to the right. With a space after the colon the
//! head takes the rest of the line instead. A colon on its own is an empty
//! sequence.
//!
//! ```rust
//! use termpose::parse_term;
//!
//! assert_eq!(parse_term("a:b").unwrap(), parse_term("a(b)").unwrap());
//! assert_eq!(parse_term("a:b:c").unwrap().to_string(), "(a (b c))");
//! assert_eq!(parse_term("a:b c").unwrap().to_string(), "((a b) c)");
//! assert_eq!(parse_term("foo: bar baz").unwrap().to_string(), "(foo bar baz)");
//! assert_eq!(parse_term("list :").unwrap().to_string(), "(list ())");
//! ```
//!
//! # Quoted atoms
//!
//! Double quotes delimit atoms that contain spaces, parens, colons or
//! control characters. Inside quotes:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\\` | backslash |
//! | `\"` | quote |
//! | `\n` | line feed |
//! | `\r` | carriage return |
//! | `\t` | tab |
//! | `\h` | ☃ |
//! | `\x` | `x` for any other character |
//!
//! ```rust
//! use termpose::parse_term;
//!
//! let term = parse_term(r#""hello world""#).unwrap();
//! assert_eq!(term.as_str(), Some("hello world"));
//! assert_eq!(term.to_string(), "\"hello world\"");
//! assert_eq!(term.to_json_string(), "\"hello world\"");
//!
//! let term = parse_term(r#""tab\there \h""#).unwrap();
//! assert_eq!(term.as_str(), Some("tab\there ☃"));
//! ```
//!
//! # Block strings
//!
//! A quote at the end of a line opens a block string. Its text is every
//! following line indented deeper than the line holding the quote, with the
//! block's indentation removed. Blank lines inside the block are dropped.
//!
//! ```rust
//! use termpose::parse_term;
//!
//! let term = parse_term("poem \"\n  roses are red\n  violets are blue").unwrap();
//! assert_eq!(term.tail()[0].as_str(), Some("roses are red\nviolets are blue"));
//! ```
//!
//! # Line endings
//!
//! `\r\n` and a lone `\r` are read as `\n`.
//!
//! # Errors
//!
//! Parsing stops at the first error and reports its line and column:
//!
//! ```rust
//! use termpose::{parse_document, Error};
//!
//! assert_eq!(
//!     parse_document(")").unwrap_err(),
//!     Error::structural(1, 1, "nothing to close")
//! );
//! ```

// This module contains only documentation; no implementation code
