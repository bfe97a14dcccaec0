//! Text renderings of a term tree.
//!
//! All writers take any [`fmt::Write`] sink and only fail when the sink does.
//!
//! - **Canonical**: fully parenthesized, `(a (b c))`. Reads back to the same tree.
//! - **Compact**: uses the colon and paren-after-head sugar, `a(b c):d`.
//! - **Pretty**: indentation based, breaking sequences that are wider than
//!   [`PrettyOptions::max_width`].
//! - **JSON**: atoms as strings, sequences as arrays.
//!
//! ## Examples
//!
//! ```rust
//! use termpose::parse_term;
//!
//! let term = parse_term("let (x 1) (y \"two words\")").unwrap();
//! assert_eq!(term.to_canonical_string(), "(let (x 1) (y \"two words\"))");
//! assert_eq!(term.to_compact_string(), "let(x:1 y:\"two words\")");
//! assert_eq!(term.to_json_string(), r#"["let",["x","1"],["y","two words"]]"#);
//! ```

use std::fmt::{self, Write};

use crate::options::PrettyOptions;
use crate::term::{Seq, Term};

/// Returns `true` if `s` has to be quoted to survive as a single atom.
///
/// # Examples
///
/// ```rust
/// use termpose::render::needs_quotes;
///
/// assert!(!needs_quotes("plain"));
/// assert!(needs_quotes("two words"));
/// assert!(needs_quotes("key:value"));
/// ```
#[must_use]
pub fn needs_quotes(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, ' ' | '\t' | '(' | ')' | ':' | '\n' | '\r'))
}

/// Writes `s` between double quotes, escaping backslash, quote, LF and CR.
fn write_quoted<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

/// Writes an atom in canonical form, quoting it only when necessary.
pub fn write_atom<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    if needs_quotes(s) {
        write_quoted(out, s)
    } else {
        out.write_str(s)
    }
}

/// Writes `(a b c)` for the given items.
pub fn write_seq<W: Write + ?Sized>(out: &mut W, items: &[Term]) -> fmt::Result {
    out.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write_canonical(out, item)?;
    }
    out.write_char(')')
}

/// Writes the canonical, fully parenthesized form of `term`.
pub fn write_canonical<W: Write + ?Sized>(out: &mut W, term: &Term) -> fmt::Result {
    match term {
        Term::Atom(a) => write_atom(out, &a.value),
        Term::Seq(s) => write_seq(out, &s.items),
    }
}

/// Writes the compact form of `term`.
///
/// An empty sequence is `:`, a pair is `head:tail`, and longer sequences
/// put their children in parens after the head.
pub fn write_compact<W: Write + ?Sized>(out: &mut W, term: &Term) -> fmt::Result {
    let items = match term {
        Term::Atom(a) => return write_atom(out, &a.value),
        Term::Seq(s) => &s.items,
    };
    match items.as_slice() {
        [] => out.write_char(':'),
        [head, tail] => {
            write_compact(out, head)?;
            out.write_char(':')?;
            write_compact(out, tail)
        }
        [Term::Atom(head), rest @ ..] => {
            write_atom(out, &head.value)?;
            out.write_char('(')?;
            for (i, item) in rest.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write_compact(out, item)?;
            }
            out.write_char(')')
        }
        [head @ Term::Seq(_), rest @ ..] => {
            out.write_char('(')?;
            write_compact(out, head)?;
            for item in rest {
                out.write_char(' ')?;
                write_compact(out, item)?;
            }
            out.write_char(')')
        }
    }
}

/// Writes `term` as indented lines, each terminated by the configured line
/// ending.
///
/// A sequence that does not fit in `max_width` starts with its head (or a
/// bare `:` when the head is itself too wide) and then lists every child,
/// head included, one level deeper.
pub fn write_pretty<W: Write + ?Sized>(
    out: &mut W,
    term: &Term,
    options: &PrettyOptions,
) -> fmt::Result {
    Pretty::new(options).term(out, term, 0)
}

/// Writes every item of a document as a pretty block at depth zero.
pub fn write_pretty_document<W: Write + ?Sized>(
    out: &mut W,
    doc: &Seq,
    options: &PrettyOptions,
) -> fmt::Result {
    let pretty = Pretty::new(options);
    for item in &doc.items {
        pretty.term(out, item, 0)?;
    }
    Ok(())
}

struct Pretty {
    unit: String,
    line_ending: &'static str,
    max_width: usize,
}

impl Pretty {
    fn new(options: &PrettyOptions) -> Self {
        Pretty {
            unit: options.indent.unit(),
            line_ending: options.line_ending.as_str(),
            max_width: options.max_width,
        }
    }

    fn term<W: Write + ?Sized>(&self, out: &mut W, term: &Term, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            out.write_str(&self.unit)?;
        }
        let items = match term {
            Term::Atom(a) => {
                write_atom(out, &a.value)?;
                return out.write_str(self.line_ending);
            }
            Term::Seq(s) => &s.items,
        };
        let Some(head) = items.first() else {
            out.write_char(':')?;
            return out.write_str(self.line_ending);
        };
        if term.estimate_length() > self.max_width {
            if head.estimate_length() > self.max_width {
                out.write_char(':')?;
            } else {
                write_compact(out, head)?;
            }
            out.write_str(self.line_ending)?;
            for item in items {
                self.term(out, item, depth + 1)?;
            }
            Ok(())
        } else {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write_compact(out, item)?;
            }
            out.write_str(self.line_ending)
        }
    }
}

/// Writes `term` as JSON: atoms become strings, sequences become arrays.
///
/// Only backslash, quote, LF and CR are escaped inside strings.
pub fn write_json<W: Write + ?Sized>(out: &mut W, term: &Term) -> fmt::Result {
    match term {
        Term::Atom(a) => write_quoted(out, &a.value),
        Term::Seq(s) => {
            out.write_char('[')?;
            for (i, item) in s.items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_json(out, item)?;
            }
            out.write_char(']')
        }
    }
}

/// Writes each document item on its own line so that the text parses back
/// into the same items.
///
/// Sequences with two or more items are written as their canonical children
/// joined by spaces (`name "Ada Lovelace"`); atoms, empty and one-element
/// sequences use their full canonical form. Atoms that are empty or contain
/// a quote are quoted here even though canonical form leaves them bare.
pub(crate) fn write_lines<W: Write + ?Sized>(out: &mut W, doc: &Seq) -> fmt::Result {
    for item in &doc.items {
        match item {
            Term::Seq(s) if s.items.len() >= 2 => {
                for (i, child) in s.items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    write_strict(out, child)?;
                }
            }
            other => write_strict(out, other)?,
        }
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_strict<W: Write + ?Sized>(out: &mut W, term: &Term) -> fmt::Result {
    match term {
        Term::Atom(a) if a.value.is_empty() || a.value.contains('"') || needs_quotes(&a.value) => {
            write_quoted(out, &a.value)
        }
        Term::Atom(a) => out.write_str(&a.value),
        Term::Seq(s) => {
            out.write_char('(')?;
            for (i, item) in s.items.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write_strict(out, item)?;
            }
            out.write_char(')')
        }
    }
}

impl Term {
    /// Renders the canonical form, same as `to_string()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termpose::Term;
    ///
    /// let term = Term::from(vec![Term::from("say"), Term::from("hi there")]);
    /// assert_eq!(term.to_canonical_string(), "(say \"hi there\")");
    /// ```
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_canonical(&mut out, self);
        out
    }

    /// Renders the compact form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termpose::parse_term;
    ///
    /// assert_eq!(parse_term("(a b)").unwrap().to_compact_string(), "a:b");
    /// assert_eq!(parse_term("(a b c)").unwrap().to_compact_string(), "a(b c)");
    /// ```
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        let _ = write_compact(&mut out, self);
        out
    }

    /// Renders the pretty, indentation based form.
    #[must_use]
    pub fn to_pretty_string(&self, options: &PrettyOptions) -> String {
        let mut out = String::new();
        let _ = write_pretty(&mut out, self, options);
        out
    }

    /// Renders the term as JSON.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        let _ = write_json(&mut out, self);
        out
    }
}
