//! Configuration for pretty rendering.
//!
//! - [`PrettyOptions`]: main configuration struct
//! - [`Indent`]: the unit written once per nesting level
//! - [`LineEnding`]: what terminates each rendered line
//!
//! ## Examples
//!
//! ```rust
//! use termpose::{parse_term, LineEnding, PrettyOptions};
//!
//! let term = parse_term("(config (name demo) (port 8080))").unwrap();
//!
//! let options = PrettyOptions::new()
//!     .with_max_width(12)
//!     .with_tabs()
//!     .with_line_ending(LineEnding::Lf);
//! let text = term.to_pretty_string(&options);
//! assert!(text.starts_with("config\n\tconfig\n"));
//! ```

/// The unit repeated once per nesting level in pretty output.
///
/// # Examples
///
/// ```rust
/// use termpose::Indent;
///
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// assert_eq!(Indent::Tab.unit(), "\t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

impl Indent {
    /// Returns the text written for one level of nesting.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(*n),
            Indent::Tab => "\t".to_string(),
        }
    }
}

/// Line terminator for pretty output.
///
/// # Examples
///
/// ```rust
/// use termpose::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for pretty rendering.
///
/// A sequence whose [`estimate_length`](crate::Term::estimate_length) exceeds
/// `max_width` is broken over several lines; anything narrower is written on
/// one line in compact form.
///
/// # Examples
///
/// ```rust
/// use termpose::{Indent, LineEnding, PrettyOptions};
///
/// // Two spaces, LF, width 80
/// let options = PrettyOptions::new();
/// assert_eq!(options.indent, Indent::Spaces(2));
/// assert_eq!(options.max_width, 80);
///
/// let options = PrettyOptions::new()
///     .with_indent(4)
///     .with_line_ending(LineEnding::CrLf)
///     .with_max_width(40);
/// assert_eq!(options.indent, Indent::Spaces(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrettyOptions {
    pub indent: Indent,
    pub line_ending: LineEnding,
    pub max_width: usize,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        PrettyOptions {
            indent: Indent::default(),
            line_ending: LineEnding::default(),
            max_width: 80,
        }
    }
}

impl PrettyOptions {
    /// Creates default options (two-space indent, LF, width 80).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indents with `spaces` spaces per level.
    #[must_use]
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = Indent::Spaces(spaces);
        self
    }

    /// Indents with one tab per level.
    #[must_use]
    pub fn with_tabs(mut self) -> Self {
        self.indent = Indent::Tab;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the width above which sequences are broken over lines.
    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }
}
