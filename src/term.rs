//! The Termpose tree: atoms and sequences.
//!
//! A [`Term`] is exactly one of
//!
//! - [`Atom`]: a symbol, stored unescaped
//! - [`Seq`]: an ordered list of child terms (possibly empty)
//!
//! Every term remembers where it started in the source text. Terms built in
//! code carry [`Position::default()`], which is `0:0`. Positions never take
//! part in equality, so a parsed tree compares equal to the same tree built
//! by hand.
//!
//! ## Examples
//!
//! ```rust
//! use termpose::{parse_term, Term};
//!
//! let term = parse_term("sword damage:4 weight:3").unwrap();
//! assert_eq!(term.initial_str(), "sword");
//! assert_eq!(term.find("damage").and_then(|t| t.tail().first()), Some(&Term::from("4")));
//!
//! let built = Term::from(vec![
//!     Term::from("sword"),
//!     Term::from(vec![Term::from("damage"), Term::from("4")]),
//!     Term::from(vec![Term::from("weight"), Term::from("3")]),
//! ]);
//! assert_eq!(term, built);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::render;

/// A 1-based line and column in the source text.
///
/// `0:0` marks a term that was not parsed from text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Returns `true` for the synthetic position of terms built in code.
    #[inline]
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A symbol. `value` holds the text after escapes have been resolved.
#[derive(Clone, Debug, Default)]
pub struct Atom {
    pub value: String,
    pub pos: Position,
}

impl Atom {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Atom {
            value: value.into(),
            pos: Position::default(),
        }
    }

    #[must_use]
    pub fn at(value: impl Into<String>, pos: Position) -> Self {
        Atom {
            value: value.into(),
            pos,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Atom {}

/// An ordered list of terms. The root of every parsed document is a `Seq`.
#[derive(Clone, Debug, Default)]
pub struct Seq {
    pub items: Vec<Term>,
    pub pos: Position,
}

impl Seq {
    #[must_use]
    pub fn new(items: Vec<Term>) -> Self {
        Seq {
            items,
            pos: Position::default(),
        }
    }

    #[must_use]
    pub fn at(items: Vec<Term>, pos: Position) -> Self {
        Seq { items, pos }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.items.iter()
    }

    /// Returns the first item whose [`Term::initial_str`] is `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Term> {
        self.items.iter().find(|t| t.initial_str() == key)
    }
}

impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Seq {}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Seq {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Term> for Seq {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Seq::new(iter.into_iter().collect())
    }
}

/// A node of a Termpose tree.
///
/// # Examples
///
/// ```rust
/// use termpose::Term;
///
/// let atom = Term::from("hello");
/// assert!(atom.is_atom());
/// assert_eq!(atom.as_str(), Some("hello"));
///
/// let seq = Term::from(vec![Term::from("a"), Term::from("b")]);
/// assert!(seq.is_seq());
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.to_string(), "(a b)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Atom(Atom),
    Seq(Seq),
}

impl Term {
    /// An atom with the synthetic position.
    #[must_use]
    pub fn atom(value: impl Into<String>) -> Self {
        Term::Atom(Atom::new(value))
    }

    /// A sequence with the synthetic position.
    #[must_use]
    pub fn seq(items: Vec<Term>) -> Self {
        Term::Seq(Seq::new(items))
    }

    /// Returns `true` if the term is an atom.
    #[inline]
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Term::Atom(_))
    }

    /// Returns `true` if the term is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Term::Seq(_))
    }

    #[inline]
    #[must_use]
    pub const fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(a) => Some(a),
            Term::Seq(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Seq> {
        match self {
            Term::Seq(s) => Some(s),
            Term::Atom(_) => None,
        }
    }

    /// If the term is an atom, returns its text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_atom().map(Atom::as_str)
    }

    /// Where the term started in the source text.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Term::Atom(a) => a.pos,
            Term::Seq(s) => s.pos,
        }
    }

    /// The number of children. Atoms have none.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Term::Atom(_) => 0,
            Term::Seq(s) => s.len(),
        }
    }

    /// Returns `true` for atoms and empty sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text of the leftmost atom, descending through first children.
    ///
    /// Returns `""` when the leftmost descent ends in an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termpose::parse_term;
    ///
    /// assert_eq!(parse_term("((a b) c)").unwrap().initial_str(), "a");
    /// assert_eq!(parse_term("(() c)").unwrap().initial_str(), "");
    /// ```
    #[must_use]
    pub fn initial_str(&self) -> &str {
        match self {
            Term::Atom(a) => &a.value,
            Term::Seq(s) => s.items.first().map_or("", Term::initial_str),
        }
    }

    /// The children of a sequence, or the atom itself as a one-element slice.
    #[must_use]
    pub fn contents(&self) -> &[Term] {
        match self {
            Term::Seq(s) => &s.items,
            Term::Atom(_) => std::slice::from_ref(self),
        }
    }

    /// Every child after the first. Empty for atoms and empty sequences.
    #[must_use]
    pub fn tail(&self) -> &[Term] {
        match self {
            Term::Seq(s) => s.items.get(1..).unwrap_or(&[]),
            Term::Atom(_) => &[],
        }
    }

    /// Returns the first child whose [`initial_str`](Term::initial_str) is `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Term> {
        self.contents().iter().find(|t| t.initial_str() == key)
    }

    /// Estimated width of the term on one line, used by pretty rendering.
    ///
    /// Atoms count their characters plus two for possible quotes; sequences
    /// count one for the opening paren plus each child and its separator.
    #[must_use]
    pub fn estimate_length(&self) -> usize {
        match self {
            Term::Atom(a) => a.value.chars().count() + 2,
            Term::Seq(s) => {
                1 + s
                    .items
                    .iter()
                    .map(|t| t.estimate_length() + 1)
                    .sum::<usize>()
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_canonical(f, self)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_atom(f, &self.value)
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_seq(f, &self.items)
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom)
    }
}

impl From<Seq> for Term {
    fn from(seq: Seq) -> Self {
        Term::Seq(seq)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::atom(value)
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::atom(value)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::seq(items)
    }
}

impl From<Vec<Term>> for Seq {
    fn from(items: Vec<Term>) -> Self {
        Seq::new(items)
    }
}

/// Atoms serialize as strings and sequences as sequences, which makes a
/// `Term` map onto JSON the same way [`Term::to_json_string`] does.
impl Serialize for Term {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Term::Atom(a) => serializer.serialize_str(&a.value),
            Term::Seq(s) => s.serialize(serializer),
        }
    }
}

impl Serialize for Seq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TermVisitor;

        impl<'de> Visitor<'de> for TermVisitor {
            type Value = Term;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a sequence of terms")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Term::atom(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Term::atom(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Term::atom(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Term::atom(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Term::atom(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Term::atom(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Term::seq(Vec::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Term::seq(Vec::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Term::seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<Term, Term>()? {
                    entries.push(Term::seq(vec![key, value]));
                }
                Ok(Term::seq(entries))
            }
        }

        deserializer.deserialize_any(TermVisitor)
    }
}
