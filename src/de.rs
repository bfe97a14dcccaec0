//! Deserializing Rust values from terms.
//!
//! The [`Deserializer`] reads a borrowed [`Term`] (or the items of a
//! document) into any `Deserialize` type. It mirrors the layout written by
//! [`to_term`](crate::to_term) and is lenient in the ways hand-written
//! documents need:
//!
//! - numbers and bools are parsed from atom text; bools also accept
//!   `yes`/`no` and `⊤`/`⟂`
//! - an atom read as a sequence is a one-element sequence
//! - a map or struct entry `key a b c` has the value `(a b c)`, while
//!   `key a` has the value `a`
//! - a bare atom in a map is a key whose value is empty, which reads as
//!   `None`, `()` or an empty collection
//! - a document holding a single item reads as that item
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use termpose::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     ports: Vec<u16>,
//!     tls: bool,
//! }
//!
//! let server: Server = from_str("host example.org\nports 80 443\ntls yes").unwrap();
//! assert_eq!(
//!     server,
//!     Server { host: "example.org".into(), ports: vec![80, 443], tls: true }
//! );
//! ```

use serde::{de, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Position, Result, Seq, Term};

#[derive(Clone, Copy, Debug)]
enum Input<'de> {
    Term(&'de Term),
    /// Several terms read as one value: a document's items, or the tail of
    /// an entry with more than one value.
    Items(&'de [Term], Position),
}

/// A deserializer over a borrowed term tree.
#[derive(Clone, Copy, Debug)]
pub struct Deserializer<'de> {
    input: Input<'de>,
}

impl<'de> Deserializer<'de> {
    #[must_use]
    pub fn from_term(term: &'de Term) -> Self {
        Deserializer {
            input: Input::Term(term),
        }
    }

    /// Reads the items of a document as one value.
    #[must_use]
    pub fn from_document(doc: &'de Seq) -> Self {
        Deserializer {
            input: Input::Items(&doc.items, doc.pos),
        }
    }

    fn from_items(items: &'de [Term], pos: Position) -> Self {
        match items {
            [only] => Deserializer::from_term(only),
            _ => Deserializer {
                input: Input::Items(items, pos),
            },
        }
    }

    fn position(&self) -> Position {
        match self.input {
            Input::Term(term) => term.position(),
            Input::Items(_, pos) => pos,
        }
    }

    /// The input with a single item unwrapped.
    fn resolved(&self) -> Input<'de> {
        match self.input {
            Input::Items([only], _) => Input::Term(only),
            other => other,
        }
    }

    fn items(&self) -> &'de [Term] {
        match self.input {
            Input::Term(term) => term.contents(),
            Input::Items(items, _) => items,
        }
    }

    fn is_empty(&self) -> bool {
        match self.resolved() {
            Input::Term(Term::Seq(seq)) => seq.is_empty(),
            Input::Term(Term::Atom(_)) => false,
            Input::Items(items, _) => items.is_empty(),
        }
    }

    fn error(&self, msg: impl fmt::Display) -> Error {
        Error::decode(self.position(), msg)
    }

    fn atom(&self, expected: &str) -> Result<&'de str> {
        match self.resolved() {
            Input::Term(Term::Atom(atom)) => Ok(&atom.value),
            _ => Err(self.error(format_args!("expected {expected}, found a sequence"))),
        }
    }

    fn parse<T: FromStr>(&self, expected: &str) -> Result<T> {
        let text = self.atom(expected)?;
        text.parse()
            .map_err(|_| self.error(format_args!("expected {expected}, found `{text}`")))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident, $expected:literal;)*) => {$(
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: de::Visitor<'de>,
        {
            visitor.$visit(self.parse($expected)?)
        }
    )*};
}

impl<'de> de::Deserializer<'de> for Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.resolved() {
            Input::Term(Term::Atom(atom)) => visitor.visit_borrowed_str(&atom.value),
            Input::Term(Term::Seq(seq)) => visitor.visit_seq(Elements::new(&seq.items)),
            Input::Items(items, _) => visitor.visit_seq(Elements::new(items)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.atom("a bool")? {
            "true" | "yes" | "⊤" => visitor.visit_bool(true),
            "false" | "no" | "⟂" => visitor.visit_bool(false),
            other => Err(self.error(format_args!("expected a bool, found `{other}`"))),
        }
    }

    deserialize_parsed! {
        deserialize_i8 => visit_i8, "an integer";
        deserialize_i16 => visit_i16, "an integer";
        deserialize_i32 => visit_i32, "an integer";
        deserialize_i64 => visit_i64, "an integer";
        deserialize_i128 => visit_i128, "an integer";
        deserialize_u8 => visit_u8, "an unsigned integer";
        deserialize_u16 => visit_u16, "an unsigned integer";
        deserialize_u32 => visit_u32, "an unsigned integer";
        deserialize_u64 => visit_u64, "an unsigned integer";
        deserialize_u128 => visit_u128, "an unsigned integer";
        deserialize_f32 => visit_f32, "a number";
        deserialize_f64 => visit_f64, "a number";
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let text = self.atom("a character")?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.error(format_args!("expected a character, found `{text}`"))),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.atom("a string")?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.is_empty() {
            visitor.visit_unit()
        } else {
            Err(self.error("expected an empty sequence"))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_seq(Elements::new(self.items()))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(Entries::new(self.items()))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let pos = self.position();
        let (name, payload) = match self.resolved() {
            Input::Term(term @ Term::Atom(_)) => (term, &[][..]),
            Input::Term(Term::Seq(seq)) => seq
                .items
                .split_first()
                .ok_or_else(|| self.error("expected an enum variant, found `()`"))?,
            Input::Items(items, _) => items
                .split_first()
                .ok_or_else(|| self.error("expected an enum variant, found nothing"))?,
        };
        visitor.visit_enum(Variant { name, payload, pos })
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

struct Elements<'de> {
    iter: std::slice::Iter<'de, Term>,
}

impl<'de> Elements<'de> {
    fn new(items: &'de [Term]) -> Self {
        Elements { iter: items.iter() }
    }
}

impl<'de> de::SeqAccess<'de> for Elements<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(term) => seed.deserialize(Deserializer::from_term(term)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Reads a list of `(key value...)` entries as a map.
struct Entries<'de> {
    iter: std::slice::Iter<'de, Term>,
    value: Option<Deserializer<'de>>,
}

impl<'de> Entries<'de> {
    fn new(items: &'de [Term]) -> Self {
        Entries {
            iter: items.iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for Entries<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        let Some(entry) = self.iter.next() else {
            return Ok(None);
        };
        let (key, rest) = entry
            .contents()
            .split_first()
            .ok_or_else(|| Error::decode(entry.position(), "expected an entry, found `()`"))?;
        self.value = Some(Deserializer::from_items(rest, entry.position()));
        seed.deserialize(Deserializer::from_term(key)).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// An enum written as `Variant` or `(Variant payload...)`.
struct Variant<'de> {
    name: &'de Term,
    payload: &'de [Term],
    pos: Position,
}

impl<'de> de::EnumAccess<'de> for Variant<'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::from_term(self.name))?;
        Ok((variant, self))
    }
}

impl<'de> de::VariantAccess<'de> for Variant<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        if self.payload.is_empty() {
            Ok(())
        } else {
            Err(Error::decode(self.pos, "expected a unit variant"))
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::from_items(self.payload, self.pos))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_seq(Elements::new(self.payload))
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(Entries::new(self.payload))
    }
}

/// Deserializes a value from a borrowed term.
///
/// # Examples
///
/// ```rust
/// use termpose::{from_term, parse_term};
///
/// let term = parse_term("(1 2 3)").unwrap();
/// let numbers: Vec<u8> = from_term(&term).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub fn from_term<'de, T>(term: &'de Term) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(Deserializer::from_term(term))
}

/// Deserializes a value from the items of a parsed document.
pub fn from_document<'de, T>(doc: &'de Seq) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(Deserializer::from_document(doc))
}
