//! Single-pass stream structurer.
//!
//! Keeps an explicit stack of open collections and blocks. The top level
//! and every block interior are statement scopes: tokens gather in a
//! pending line until a `;` closes it. Collections have no lines; their
//! children are appended directly, `;` included.
//!
//! ```text
//! class A { f(x); }
//!
//! Line[class A]  Block[{ Line[f Collection[( x )] ;] }]
//! ```

use std::mem;

use qrp_ir::ClassifiedToken;

use crate::config::StructureConfig;
use crate::delimiter::{Delimiter, Role};
use crate::error::StructureError;
use crate::unit::{Node, StructuralUnit, UnitKind};

/// An open collection or block.
struct Frame {
    delimiter: Delimiter,
    open: ClassifiedToken,
    children: Vec<Node>,
    /// Pending line; always empty for collections.
    line: Vec<Node>,
}

impl Frame {
    fn new(delimiter: Delimiter, open: ClassifiedToken) -> Self {
        Frame {
            delimiter,
            open,
            children: Vec::new(),
            line: Vec::new(),
        }
    }

    /// Close the frame. `close` is `None` when recovery closes it implicitly.
    fn into_unit(mut self, close: Option<ClassifiedToken>) -> StructuralUnit {
        flush_into_block(&mut self.line, &mut self.children);
        let mut nodes = Vec::with_capacity(self.children.len() + 2);
        nodes.push(Node::Token(self.open));
        nodes.append(&mut self.children);
        nodes.extend(close.map(Node::Token));
        StructuralUnit::new(self.delimiter.unit_kind(), nodes)
    }
}

/// A pending line inside a block becomes a unit only if it holds something
/// significant; otherwise its trivia stays as loose leaves of the block.
fn flush_into_block(line: &mut Vec<Node>, children: &mut Vec<Node>) {
    if line.is_empty() {
        return;
    }
    if line.iter().any(Node::is_significant) {
        children.push(Node::Unit(StructuralUnit::new(UnitKind::Line, mem::take(line))));
    } else {
        children.append(line);
    }
}

/// Groups a classified token stream into a forest of structural units.
///
/// Feed tokens in order with [`push`](Self::push) (strict) or
/// [`push_recovering`](Self::push_recovering), then call the matching
/// `finish`. Grouping only reparents tokens: flattening the forest yields
/// the accepted tokens in their original order.
pub struct Structurer {
    config: StructureConfig,
    stack: Vec<Frame>,
    forest: Vec<StructuralUnit>,
    /// Pending top-level line.
    line: Vec<Node>,
    /// Trivia seen before the first top-level unit.
    leading: Vec<Node>,
}

impl Structurer {
    pub fn new(config: StructureConfig) -> Self {
        Structurer {
            config,
            stack: Vec::new(),
            forest: Vec::new(),
            line: Vec::new(),
            leading: Vec::new(),
        }
    }

    /// Number of collections and blocks currently open.
    pub fn open_units(&self) -> usize {
        self.stack.len()
    }

    /// Accept one token. On error nothing changes.
    pub fn push(&mut self, token: ClassifiedToken) -> Result<(), StructureError> {
        if let Some(err) = self.check(&token) {
            return Err(err);
        }
        self.accept(token);
        Ok(())
    }

    /// Accept one token, keeping an unmatched closer as a plain leaf.
    pub fn push_recovering(&mut self, token: ClassifiedToken) -> Option<StructureError> {
        let err = self.check(&token);
        match &err {
            None => self.accept(token),
            Some(err) => {
                tracing::warn!(%err, "kept unmatched closer as a leaf");
                self.append(Node::Token(token));
            }
        }
        err
    }

    /// Close the top-level line and return the forest. Fails if any
    /// collection or block is still open.
    pub fn finish(mut self) -> Result<Vec<StructuralUnit>, StructureError> {
        if let Some(err) = self.unterminated() {
            return Err(err);
        }
        self.flush_top_line();
        self.flush_leading();
        tracing::debug!(units = self.forest.len(), "structured stream");
        Ok(self.forest)
    }

    /// Close every open unit implicitly and return the forest, with the
    /// unterminated-structure error if there were open units.
    pub fn finish_recovering(mut self) -> (Vec<StructuralUnit>, Option<StructureError>) {
        let err = self.unterminated();
        if let Some(err) = &err {
            tracing::warn!(%err, "closing open units at end of stream");
        }
        while let Some(frame) = self.stack.pop() {
            self.place(frame.into_unit(None));
        }
        self.flush_top_line();
        self.flush_leading();
        tracing::debug!(units = self.forest.len(), "structured stream");
        (self.forest, err)
    }

    fn unterminated(&self) -> Option<StructureError> {
        self.stack
            .last()
            .map(|frame| StructureError::UnterminatedStructure {
                open: frame.open.clone(),
                delimiter: frame.delimiter,
                unclosed: self.stack.len(),
            })
    }

    /// Validate a closer against the innermost open unit.
    fn check(&self, token: &ClassifiedToken) -> Option<StructureError> {
        let Role::Close(delimiter) = Role::of(token) else {
            return None;
        };
        match self.stack.last() {
            None => Some(StructureError::UnopenedDelimiter {
                close: token.clone(),
                delimiter,
            }),
            Some(frame) if frame.delimiter != delimiter => {
                Some(StructureError::MismatchedDelimiter {
                    open: frame.open.clone(),
                    close: token.clone(),
                    expected: frame.delimiter,
                })
            }
            Some(_) => None,
        }
    }

    fn accept(&mut self, token: ClassifiedToken) {
        if token.is_trivia() && !self.config.keep_trivia {
            return;
        }
        match Role::of(&token) {
            Role::Open(delimiter) => {
                if delimiter == Delimiter::Brace {
                    self.end_line();
                }
                tracing::trace!(%delimiter, position = %token.position(), "open unit");
                self.stack.push(Frame::new(delimiter, token));
            }
            Role::Close(_) => {
                // `check` guarantees a matching frame.
                if let Some(frame) = self.stack.pop() {
                    self.place(frame.into_unit(Some(token)));
                }
            }
            Role::Separator => {
                self.append(Node::Token(token));
                self.end_line();
            }
            Role::Leaf => self.append(Node::Token(token)),
        }
    }

    /// Append a leaf or collection at the current position: the pending
    /// line of a statement scope, or straight into a collection.
    fn append(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) if frame.delimiter == Delimiter::Paren => frame.children.push(node),
            Some(frame) => frame.line.push(node),
            None => self.line.push(node),
        }
    }

    /// Attach a just-closed unit to its parent scope.
    fn place(&mut self, unit: StructuralUnit) {
        if unit.kind() != UnitKind::Block {
            self.append(Node::Unit(unit));
            return;
        }
        // The enclosing line was closed when the block opened.
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(Node::Unit(unit)),
            None => self.push_top(unit),
        }
    }

    fn push_top(&mut self, mut unit: StructuralUnit) {
        if !self.leading.is_empty() {
            unit.prepend(mem::take(&mut self.leading));
        }
        self.forest.push(unit);
    }

    /// Close the pending line of the current statement scope.
    fn end_line(&mut self) {
        match self.stack.last_mut() {
            Some(frame) if frame.delimiter == Delimiter::Brace => {
                flush_into_block(&mut frame.line, &mut frame.children);
            }
            Some(_) => {}
            None => self.flush_top_line(),
        }
    }

    /// Close the pending top-level line. Trivia alone is not a statement:
    /// it trails the previous unit, or leads the next one at file start.
    fn flush_top_line(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let line = mem::take(&mut self.line);
        if line.iter().any(Node::is_significant) {
            self.push_top(StructuralUnit::new(UnitKind::Line, line));
        } else if let Some(last) = self.forest.last_mut() {
            last.extend_trailing(line);
        } else {
            self.leading.extend(line);
        }
    }

    /// A stream of nothing but trivia still yields one line.
    fn flush_leading(&mut self) {
        if !self.leading.is_empty() {
            let leading = mem::take(&mut self.leading);
            self.forest.push(StructuralUnit::new(UnitKind::Line, leading));
        }
    }
}
