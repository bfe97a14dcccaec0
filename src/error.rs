//! Error types for Termpose parsing, rendering and the serde bridge.
//!
//! Parse errors are fatal: the parser stops at the first problem and reports
//! the line and column (both 1-based) where it was detected.
//!
//! ## Error Categories
//!
//! - **Structural**: unbalanced parens, terms written without a separator
//! - **Indentation**: a line whose indentation is not consistent with its neighbours
//! - **String literal**: block string indentation problems, input ending mid-escape
//! - **Decode**: a term that does not have the shape a Rust type expects
//!
//! ## Examples
//!
//! ```rust
//! use termpose::{parse_document, Error};
//!
//! let err = parse_document(")").unwrap_err();
//! assert!(matches!(err, Error::Structural { .. }));
//! assert_eq!((err.line(), err.column()), (Some(1), Some(1)));
//! ```

use std::fmt;
use thiserror::Error;

use crate::term::Position;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unbalanced parentheses or terms that run into each other.
    #[error("Structural error at line {line}, column {column}: {msg}")]
    Structural {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Indentation that is not a prefix extension of the enclosing level.
    #[error("Indentation error at line {line}, column {column}: {msg}")]
    Indentation {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Problems inside quoted or multi-line strings.
    #[error("String literal error at line {line}, column {column}: {msg}")]
    StringLiteral {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A term could not be decoded into the requested Rust type.
    ///
    /// Terms built in code carry position `0:0`.
    #[error("Decode error at line {line}, column {column}: {msg}")]
    Decode {
        line: usize,
        column: usize,
        msg: String,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a structural error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termpose::Error;
    ///
    /// let err = Error::structural(3, 7, "unmatched closing paren");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn structural(line: usize, column: usize, msg: &str) -> Self {
        Error::Structural {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates an indentation error.
    pub fn indentation(line: usize, column: usize, msg: &str) -> Self {
        Error::Indentation {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates a string literal error.
    pub fn string_literal(line: usize, column: usize, msg: &str) -> Self {
        Error::StringLiteral {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates a decode error located at a term's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termpose::{Error, Position};
    ///
    /// let err = Error::decode(Position::new(2, 5), "expected an integer");
    /// assert_eq!(err.line(), Some(2));
    /// assert_eq!(err.message(), "expected an integer");
    /// ```
    pub fn decode<T: fmt::Display>(pos: Position, msg: T) -> Self {
        Error::Decode {
            line: pos.line,
            column: pos.column,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// The line the error was detected on, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.position().map(|pos| pos.line)
    }

    /// The column the error was detected at, if it has one.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.position().map(|pos| pos.column)
    }

    /// The location carried by positioned variants.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Structural { line, column, .. }
            | Error::Indentation { line, column, .. }
            | Error::StringLiteral { line, column, .. }
            | Error::Decode { line, column, .. } => Some(Position::new(*line, *column)),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// The bare message, without the location prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::Structural { msg, .. }
            | Error::Indentation { msg, .. }
            | Error::StringLiteral { msg, .. }
            | Error::Decode { msg, .. } => msg,
            Error::Io(msg) | Error::Custom(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
