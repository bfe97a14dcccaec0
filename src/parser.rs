//! The Termpose parser.
//!
//! A single pass over the input, one character at a time. The parser is a
//! state machine ([`Mode`]) that builds the tree as it goes:
//!
//! - a stack of indentation levels turns deeper lines into children of the
//!   line above them
//! - a per-line stack of open parens tracks explicit nesting
//! - a pending colon receptacle receives the term written right after `:`
//! - block strings (a `"` at the end of a line) read the following, more
//!   indented lines verbatim
//!
//! Terms can be wrapped after they are finished (`a(b)` turns the atom `a`
//! into the head of a new sequence), so the tree under construction lives in
//! an arena where every child position can be re-pointed. The arena is
//! turned into an owned [`Term`](crate::Term) tree once the input is
//! exhausted.

use std::mem;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::term::{Atom, Position, Seq, Term};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    EatingIndentation,
    SeekingTerm,
    ImmediatelyAfterTerm,
    BuildingSymbol,
    BuildingQuotedSymbol,
    TakingEscape,
    MultiLineFirstLine,
    MultiLineTakingText,
    MultiLineTakingIndent,
}

type NodeId = usize;

const ROOT: NodeId = 0;

/// An arena node. `text` is set for atoms; sequences keep it `None`.
#[derive(Debug)]
struct Node {
    pos: Position,
    text: Option<String>,
    items: Vec<NodeId>,
}

/// A child position inside a sequence. Wrapping a finished term re-points
/// its slot at the new wrapper.
#[derive(Clone, Copy, Debug)]
struct Slot {
    parent: NodeId,
    index: usize,
}

#[derive(Clone, Copy, Debug)]
struct IndentLevel {
    depth: usize,
    target: NodeId,
}

/// An open sequence on the current line. The first level of every line is
/// implicit; `(` opens explicit levels; `a: ` opens implicit ones.
#[derive(Clone, Copy, Debug)]
struct ParenLevel {
    slot: Slot,
    explicit: bool,
}

/// The sequence that receives the next term after a colon.
#[derive(Clone, Copy, Debug)]
struct Colon {
    slot: Slot,
    seq: NodeId,
    // `a:` may turn into a level spanning the rest of the line; a bare `:` may not.
    spreads: bool,
}

/// A reusable Termpose parser.
///
/// [`parse_document`](crate::parse_document) is the usual entry point; a
/// `Parser` is useful for parsing several documents without reallocating its
/// bookkeeping, or for parsing from any `char` iterator.
///
/// # Examples
///
/// ```rust
/// use termpose::{Parser, Term};
///
/// let mut parser = Parser::new();
/// let doc = parser.parse("a b\nc".chars()).unwrap();
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.items[1], Term::from("c"));
///
/// // The same parser can be reused.
/// let doc = parser.parse("x".chars()).unwrap();
/// assert_eq!(doc.items, vec![Term::from("x")]);
/// ```
#[derive(Debug)]
pub struct Parser {
    mode: Mode,
    return_modes: Vec<Mode>,
    nodes: Vec<Node>,
    indents: Vec<IndentLevel>,
    parens: Vec<ParenLevel>,
    colon: Option<Colon>,
    last_completed: Option<Slot>,
    buffer: String,
    token_start: Position,
    line_start: Position,
    previous_indent: String,
    current_indent: String,
    found_line: bool,
    block_indent: String,
    block_indent_buffer: String,
    line: usize,
    column: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Parser {
            mode: Mode::EatingIndentation,
            return_modes: Vec::new(),
            nodes: Vec::new(),
            indents: Vec::new(),
            parens: Vec::new(),
            colon: None,
            last_completed: None,
            buffer: String::new(),
            token_start: Position::new(1, 1),
            line_start: Position::new(1, 1),
            previous_indent: String::new(),
            current_indent: String::new(),
            found_line: false,
            block_indent: String::new(),
            block_indent_buffer: String::new(),
            line: 1,
            column: 1,
        }
    }

    /// Parses a whole document and returns its root sequence.
    ///
    /// `\r\n` and lone `\r` are read as `\n`. The first error stops the
    /// parse.
    pub fn parse<I>(&mut self, input: I) -> Result<Seq>
    where
        I: IntoIterator<Item = char>,
    {
        self.reset();
        match self.run(input) {
            Ok(()) => Ok(self.take_seq(ROOT)),
            Err(err) => {
                debug!(%err, "rejected termpose document");
                Err(err)
            }
        }
    }

    fn run<I>(&mut self, input: I) -> Result<()>
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars = input.into_iter().peekable();
        while let Some(mut c) = chars.next() {
            if c == '\r' {
                c = '\n';
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            self.dispatch(Some(c))?;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.dispatch(None)
    }

    fn reset(&mut self) {
        self.mode = Mode::EatingIndentation;
        self.return_modes.clear();
        self.nodes.clear();
        self.nodes.push(Node {
            pos: Position::new(1, 1),
            text: None,
            items: Vec::new(),
        });
        self.indents.clear();
        self.indents.push(IndentLevel {
            depth: 0,
            target: ROOT,
        });
        self.parens.clear();
        self.colon = None;
        self.last_completed = None;
        self.buffer.clear();
        self.token_start = Position::new(1, 1);
        self.line_start = Position::new(1, 1);
        self.previous_indent.clear();
        self.current_indent.clear();
        self.found_line = false;
        self.block_indent.clear();
        self.block_indent_buffer.clear();
        self.line = 1;
        self.column = 1;
    }

    /// Feeds one event to the current mode. `None` is the end of input.
    fn dispatch(&mut self, c: Option<char>) -> Result<()> {
        match self.mode {
            Mode::EatingIndentation => self.eating_indentation(c),
            Mode::SeekingTerm => self.seeking_term(c),
            Mode::ImmediatelyAfterTerm => self.immediately_after_term(c),
            Mode::BuildingSymbol => self.building_symbol(c),
            Mode::BuildingQuotedSymbol => self.building_quoted_symbol(c),
            Mode::TakingEscape => self.taking_escape(c),
            Mode::MultiLineFirstLine => self.multi_line_first_line(c),
            Mode::MultiLineTakingText => self.multi_line_taking_text(c),
            Mode::MultiLineTakingIndent => self.multi_line_taking_indent(c),
        }
    }

    fn redispatch(&mut self, mode: Mode, c: Option<char>) -> Result<()> {
        self.mode = mode;
        self.dispatch(c)
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn structural(&self, msg: &str) -> Error {
        Error::structural(self.line, self.column, msg)
    }

    fn indentation(&self, msg: &str) -> Error {
        Error::indentation(self.line, self.column, msg)
    }

    fn string_literal(&self, msg: &str) -> Error {
        Error::string_literal(self.line, self.column, msg)
    }

    // Modes

    fn eating_indentation(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.buffer.clear();
                self.finish_indentation()
            }
            Some('\n') => {
                self.buffer.clear();
                Ok(())
            }
            Some('(' | ':') => {
                self.finish_indentation()?;
                self.redispatch(Mode::SeekingTerm, c)
            }
            Some(')') => Err(self.structural("nothing to close")),
            Some('"') => {
                self.finish_indentation()?;
                self.token_start = self.here();
                self.mode = Mode::BuildingQuotedSymbol;
                Ok(())
            }
            Some(ch @ (' ' | '\t')) => {
                self.buffer.push(ch);
                Ok(())
            }
            Some(_) => {
                self.finish_indentation()?;
                self.token_start = self.here();
                self.redispatch(Mode::BuildingSymbol, c)
            }
        }
    }

    fn seeking_term(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.buffer.clear();
                self.finish_indentation()
            }
            Some('(') => {
                let seq = self.new_seq(self.here());
                let slot = self.attach(seq);
                self.parens.push(ParenLevel {
                    slot,
                    explicit: true,
                });
                Ok(())
            }
            Some(')') => {
                self.close_paren()?;
                self.mode = Mode::ImmediatelyAfterTerm;
                Ok(())
            }
            Some(':') => {
                let seq = self.new_seq(self.here());
                let slot = self.attach(seq);
                self.colon = Some(Colon {
                    slot,
                    seq,
                    spreads: false,
                });
                Ok(())
            }
            Some('\n') => {
                self.mode = Mode::EatingIndentation;
                Ok(())
            }
            Some(' ' | '\t') => {
                // `head: rest of line` collects everything up to the end of
                // the line (or the enclosing paren) under `head`.
                if let Some(Colon {
                    slot,
                    spreads: true,
                    ..
                }) = self.colon
                {
                    self.colon = None;
                    self.parens.push(ParenLevel {
                        slot,
                        explicit: false,
                    });
                }
                Ok(())
            }
            Some('"') => {
                self.token_start = self.here();
                self.mode = Mode::BuildingQuotedSymbol;
                Ok(())
            }
            Some(_) => {
                self.token_start = self.here();
                self.redispatch(Mode::BuildingSymbol, c)
            }
        }
    }

    fn immediately_after_term(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.buffer.clear();
                self.finish_indentation()
            }
            Some('(') => {
                let slot = self.last_completed()?;
                self.wrap(slot);
                self.parens.push(ParenLevel {
                    slot,
                    explicit: true,
                });
                self.mode = Mode::SeekingTerm;
                Ok(())
            }
            Some(')') => self.close_paren(),
            Some(':') => {
                let slot = self.last_completed()?;
                let seq = self.wrap(slot);
                self.colon = Some(Colon {
                    slot,
                    seq,
                    spreads: true,
                });
                self.mode = Mode::SeekingTerm;
                Ok(())
            }
            Some('\n') => {
                self.mode = Mode::EatingIndentation;
                Ok(())
            }
            Some(' ' | '\t') => {
                self.mode = Mode::SeekingTerm;
                Ok(())
            }
            Some('"') => {
                let slot = self.last_completed()?;
                let seq = self.wrap(slot);
                self.colon = Some(Colon {
                    slot,
                    seq,
                    spreads: false,
                });
                self.token_start = self.here();
                self.mode = Mode::BuildingQuotedSymbol;
                Ok(())
            }
            Some(_) => Err(self.structural("separator required between terms")),
        }
    }

    fn building_symbol(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.finish_symbol();
                self.finish_indentation()
            }
            Some(' ' | '\t') => {
                self.finish_symbol();
                self.mode = Mode::SeekingTerm;
                Ok(())
            }
            Some(':' | '\n' | '(' | ')' | '"') => {
                self.finish_symbol();
                self.redispatch(Mode::ImmediatelyAfterTerm, c)
            }
            Some(ch) => {
                self.buffer.push(ch);
                Ok(())
            }
        }
    }

    fn building_quoted_symbol(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.finish_symbol();
                self.finish_indentation()
            }
            Some('"') => {
                self.finish_symbol();
                self.mode = Mode::ImmediatelyAfterTerm;
                Ok(())
            }
            Some('\\') => {
                self.return_modes.push(self.mode);
                self.mode = Mode::TakingEscape;
                Ok(())
            }
            Some('\n') if self.buffer.is_empty() => {
                self.block_indent_buffer.clear();
                self.mode = Mode::MultiLineFirstLine;
                Ok(())
            }
            Some('\n') => {
                self.finish_symbol();
                self.mode = Mode::EatingIndentation;
                Ok(())
            }
            Some(ch) => {
                self.buffer.push(ch);
                Ok(())
            }
        }
    }

    fn taking_escape(&mut self, c: Option<char>) -> Result<()> {
        let Some(ch) = c else {
            return Err(self.string_literal("input ended in the middle of an escape sequence"));
        };
        self.buffer.push(match ch {
            'h' => '\u{2603}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        });
        self.mode = self
            .return_modes
            .pop()
            .unwrap_or(Mode::BuildingQuotedSymbol);
        Ok(())
    }

    fn multi_line_first_line(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.finish_symbol();
                self.finish_indentation()
            }
            Some(ch @ (' ' | '\t')) => {
                self.block_indent_buffer.push(ch);
                Ok(())
            }
            Some(_) => {
                let indent = mem::take(&mut self.block_indent_buffer);
                if indent.len() > self.current_indent.len()
                    && indent.starts_with(self.current_indent.as_str())
                {
                    self.block_indent = indent;
                    self.redispatch(Mode::MultiLineTakingText, c)
                } else {
                    // Nothing indented under the quote: the string is empty and
                    // the whitespace read so far belongs to the next line.
                    self.finish_symbol();
                    self.buffer = indent;
                    self.redispatch(Mode::EatingIndentation, c)
                }
            }
        }
    }

    fn multi_line_taking_text(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.finish_symbol();
                self.finish_indentation()
            }
            Some('\n') => {
                self.block_indent_buffer.clear();
                self.mode = Mode::MultiLineTakingIndent;
                Ok(())
            }
            Some(ch) => {
                self.buffer.push(ch);
                Ok(())
            }
        }
    }

    fn multi_line_taking_indent(&mut self, c: Option<char>) -> Result<()> {
        match c {
            None => {
                self.finish_symbol();
                self.finish_indentation()
            }
            Some(ch @ (' ' | '\t')) => {
                self.block_indent_buffer.push(ch);
                if self.block_indent_buffer.len() == self.block_indent.len() {
                    if self.block_indent_buffer != self.block_indent {
                        return Err(self.string_literal(
                            "block string line is not indented like the first line",
                        ));
                    }
                    self.block_indent_buffer.clear();
                    self.buffer.push('\n');
                    self.mode = Mode::MultiLineTakingText;
                }
                Ok(())
            }
            // Blank lines inside a block string are dropped.
            Some('\n') => {
                self.block_indent_buffer.clear();
                Ok(())
            }
            Some(_) => {
                let partial = mem::take(&mut self.block_indent_buffer);
                if !self.block_indent.starts_with(partial.as_str()) {
                    return Err(self.string_literal(
                        "block string line is not indented like the first line",
                    ));
                }
                self.finish_symbol();
                self.buffer = partial;
                self.redispatch(Mode::EatingIndentation, c)
            }
        }
    }

    // Tree building

    fn new_seq(&mut self, pos: Position) -> NodeId {
        self.nodes.push(Node {
            pos,
            text: None,
            items: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn new_atom(&mut self, text: String, pos: Position) -> NodeId {
        self.nodes.push(Node {
            pos,
            text: Some(text),
            items: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn push_child(&mut self, parent: NodeId, child: NodeId) -> Slot {
        let items = &mut self.nodes[parent].items;
        items.push(child);
        Slot {
            parent,
            index: items.len() - 1,
        }
    }

    fn get(&self, slot: Slot) -> NodeId {
        self.nodes[slot.parent].items[slot.index]
    }

    fn set(&mut self, slot: Slot, node: NodeId) {
        self.nodes[slot.parent].items[slot.index] = node;
    }

    /// Replaces the term in `slot` by a new sequence whose only child is
    /// that term, and returns the new sequence.
    fn wrap(&mut self, slot: Slot) -> NodeId {
        let head = self.get(slot);
        let wrapper = self.new_seq(self.nodes[head].pos);
        self.nodes[wrapper].items.push(head);
        self.set(slot, wrapper);
        wrapper
    }

    /// A line-level sequence holding a single term is replaced by that term.
    fn unwrap_if_sole(&mut self, slot: Slot) {
        let node = &self.nodes[self.get(slot)];
        if node.text.is_none() && node.items.len() == 1 {
            let only = node.items[0];
            self.set(slot, only);
        }
    }

    fn last_completed(&self) -> Result<Slot> {
        self.last_completed
            .ok_or_else(|| self.structural("no term to extend"))
    }

    /// The sequence the next term belongs in: the pending colon receptacle if
    /// there is one, otherwise the innermost open level of the line, which is
    /// created on demand.
    fn receptacle(&mut self) -> NodeId {
        if let Some(colon) = self.colon.take() {
            return colon.seq;
        }
        let top = match self.parens.last() {
            Some(level) => level.slot,
            None => {
                let line_seq = self.new_seq(self.line_start);
                let target = self.indents.last().map_or(ROOT, |level| level.target);
                let slot = self.push_child(target, line_seq);
                self.parens.push(ParenLevel {
                    slot,
                    explicit: false,
                });
                slot
            }
        };
        self.get(top)
    }

    fn attach(&mut self, node: NodeId) -> Slot {
        let parent = self.receptacle();
        let slot = self.push_child(parent, node);
        self.last_completed = Some(slot);
        slot
    }

    fn finish_symbol(&mut self) {
        let text = mem::take(&mut self.buffer);
        let atom = self.new_atom(text, self.token_start);
        self.attach(atom);
    }

    fn close_paren(&mut self) -> Result<()> {
        self.colon = None;
        match self.parens.iter().rposition(|level| level.explicit) {
            Some(index) => {
                let closed = self.parens[index];
                self.parens.truncate(index);
                self.last_completed = Some(closed.slot);
                Ok(())
            }
            None => Err(self.structural("unmatched closing paren")),
        }
    }

    /// Runs once per line, when its indentation has been read, and attaches
    /// the line to the right level of the tree.
    fn finish_indentation(&mut self) -> Result<()> {
        self.previous_indent = mem::replace(&mut self.current_indent, mem::take(&mut self.buffer));
        self.line_start = self.here();
        if !self.found_line {
            // The first line's indentation is the depth of the top level.
            self.found_line = true;
            if let Some(root) = self.indents.first_mut() {
                root.depth = self.current_indent.len();
            }
            return Ok(());
        }

        let depth = self.current_indent.len();
        let previous = self.previous_indent.len();
        if depth > previous {
            if !self.current_indent.starts_with(self.previous_indent.as_str()) {
                return Err(self.indentation("inconsistent indentation"));
            }
            if self.parens.len() > 1 || self.colon.is_some() {
                if let Some(first) = self.parens.first().copied() {
                    self.unwrap_if_sole(first.slot);
                }
            }
            let target = self.receptacle();
            trace!(depth, line = self.line, "indentation level opened");
            self.indents.push(IndentLevel { depth, target });
        } else {
            if let Some(first) = self.parens.first().copied() {
                self.unwrap_if_sole(first.slot);
            }
            self.colon = None;
            if !self.previous_indent.starts_with(self.current_indent.as_str()) {
                return Err(self.indentation("inconsistent indentation"));
            }
            let mut popped = false;
            while self.indents.len() > 1 {
                match self.indents.last() {
                    Some(level) if level.depth > depth => {
                        trace!(depth = level.depth, line = self.line, "indentation level closed");
                        self.indents.pop();
                        popped = true;
                    }
                    _ => break,
                }
            }
            if popped && self.indents.last().map_or(0, |level| level.depth) < depth {
                return Err(self.indentation("siblings have inconsistent indentation"));
            }
        }
        self.parens.clear();
        Ok(())
    }

    // Conversion

    fn take_term(&mut self, id: NodeId) -> Term {
        let pos = self.nodes[id].pos;
        match self.nodes[id].text.take() {
            Some(value) => Term::Atom(Atom::at(value, pos)),
            None => Term::Seq(self.take_seq(id)),
        }
    }

    fn take_seq(&mut self, id: NodeId) -> Seq {
        let pos = self.nodes[id].pos;
        let children = mem::take(&mut self.nodes[id].items);
        let items = children
            .into_iter()
            .map(|child| self.take_term(child))
            .collect();
        Seq::at(items, pos)
    }
}
