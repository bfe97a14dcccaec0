//! Serializing Rust values into terms.
//!
//! [`TermSerializer`] turns any `Serialize` value into a [`Term`]:
//!
//! | Rust | Term |
//! |---|---|
//! | bool, numbers, char, strings | atom |
//! | `()`, unit structs, `None` | `()` |
//! | `Some(x)`, newtype structs | same as `x` |
//! | sequences, tuples | sequence |
//! | maps, structs | sequence of `(key value)` pairs |
//! | unit variant | atom naming the variant |
//! | newtype variant | `(Variant value)` |
//! | tuple variant | `(Variant a b ...)` |
//! | struct variant | `(Variant (field value) ...)` |
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use termpose::to_term;
//!
//! #[derive(Serialize)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Dot,
//! }
//!
//! let term = to_term(&vec![Shape::Circle { radius: 1.5 }, Shape::Dot]).unwrap();
//! assert_eq!(term.to_string(), "((Circle (radius 1.5)) Dot)");
//! ```

use serde::{ser, Serialize};

use crate::{Error, Result, Term};

/// Converts values into [`Term`] trees. Stateless.
pub struct TermSerializer;

pub struct SerializeVec {
    items: Vec<Term>,
}

pub struct SerializeMap {
    entries: Vec<Term>,
    current_key: Option<Term>,
}

impl ser::Serializer for TermSerializer {
    type Ok = Term;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_i16(self, v: i16) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_i32(self, v: i32) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_i64(self, v: i64) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_u16(self, v: u16) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_u32(self, v: u32) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_u64(self, v: u64) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Term> {
        Ok(Term::atom(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Term> {
        Ok(Term::atom(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Term> {
        let items = v.iter().map(|b| Term::atom(b.to_string())).collect();
        Ok(Term::seq(items))
    }

    fn serialize_none(self) -> Result<Term> {
        Ok(Term::seq(Vec::new()))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Term>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Term> {
        Ok(Term::seq(Vec::new()))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Term> {
        Ok(Term::seq(Vec::new()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Term> {
        Ok(Term::atom(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Term>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Term>
    where
        T: ?Sized + Serialize,
    {
        Ok(Term::seq(vec![Term::atom(variant), to_term(value)?]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        let mut vec = SerializeVec::with_capacity(len + 1);
        vec.items.push(Term::atom(variant));
        Ok(vec)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        let mut map = SerializeMap::new();
        map.entries.push(Term::atom(variant));
        Ok(map)
    }
}

impl SerializeVec {
    fn with_capacity(len: usize) -> Self {
        SerializeVec {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_term(value)?);
        Ok(())
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            entries: Vec::new(),
            current_key: None,
        }
    }

    fn push_entry(&mut self, key: Term, value: Term) {
        self.entries.push(Term::seq(vec![key, value]));
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Term;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.items))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Term;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.items))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Term;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.items))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Term;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.items))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Term;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_term(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = to_term(value)?;
        self.push_entry(key, value);
        Ok(())
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.entries))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Term;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_term(value)?;
        self.push_entry(Term::atom(key), value);
        Ok(())
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.entries))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Term;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_term(value)?;
        self.push_entry(Term::atom(key), value);
        Ok(())
    }

    fn end(self) -> Result<Term> {
        Ok(Term::seq(self.entries))
    }
}

/// Converts any `Serialize` value into a [`Term`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use termpose::to_term;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("ada", 3);
/// scores.insert("bob", 5);
///
/// let term = to_term(&scores).unwrap();
/// assert_eq!(term.to_string(), "((ada 3) (bob 5))");
/// ```
pub fn to_term<T>(value: &T) -> Result<Term>
where
    T: ?Sized + Serialize,
{
    value.serialize(TermSerializer)
}
