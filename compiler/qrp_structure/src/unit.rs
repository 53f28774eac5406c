//! Structural units: the nodes of a structured token forest.

use std::fmt;

use qrp_ir::ClassifiedToken;

/// The three grouping shapes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnitKind {
    /// A statement, ended by `;` (or by the end of its scope).
    Line,
    /// A `(` ... `)` group.
    Collection,
    /// A `{` ... `}` group.
    Block,
}

impl UnitKind {
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Line => "Line",
            UnitKind::Collection => "Collection",
            UnitKind::Block => "Block",
        }
    }

    /// Collections and blocks add a nesting level; lines do not.
    pub const fn is_delimited(self) -> bool {
        matches!(self, UnitKind::Collection | UnitKind::Block)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A child of a structural unit: a token leaf or a nested unit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Node {
    Token(ClassifiedToken),
    Unit(StructuralUnit),
}

impl Node {
    pub fn as_token(&self) -> Option<&ClassifiedToken> {
        match self {
            Node::Token(token) => Some(token),
            Node::Unit(_) => None,
        }
    }

    pub fn as_unit(&self) -> Option<&StructuralUnit> {
        match self {
            Node::Token(_) => None,
            Node::Unit(unit) => Some(unit),
        }
    }

    /// Whether this node holds anything besides whitespace and comments.
    pub fn is_significant(&self) -> bool {
        match self {
            Node::Token(token) => !token.is_trivia(),
            Node::Unit(_) => true,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Token(_) => 0,
            Node::Unit(unit) => unit.depth(),
        }
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a ClassifiedToken>) {
        match self {
            Node::Token(token) => out.push(token),
            Node::Unit(unit) => unit.collect_tokens(out),
        }
    }
}

/// A Line, Collection or Block and its ordered children.
///
/// Collections and blocks keep their delimiter tokens as first and last
/// leaf (the last is missing when the unit was closed by error recovery).
/// A top-level unit may additionally carry the whitespace and comments
/// around it that belong to no statement of their own. Flattening a unit
/// gives its tokens in source order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructuralUnit {
    kind: UnitKind,
    children: Vec<Node>,
}

impl StructuralUnit {
    pub fn new(kind: UnitKind, children: Vec<Node>) -> Self {
        StructuralUnit { kind, children }
    }

    #[inline]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Delimiter nesting depth: 1 for a collection or block without nested
    /// groups, 0 for a line of plain tokens.
    pub fn depth(&self) -> usize {
        let inner = self.children.iter().map(Node::depth).max().unwrap_or(0);
        if self.kind.is_delimited() {
            inner + 1
        } else {
            inner
        }
    }

    /// Every leaf token, in source order.
    pub fn tokens(&self) -> Vec<&ClassifiedToken> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Token(_) => 1,
                Node::Unit(unit) => unit.leaf_count(),
            })
            .sum()
    }

    /// Source text covered by this unit.
    pub fn text(&self) -> String {
        self.tokens().into_iter().map(ClassifiedToken::text).collect()
    }

    /// Attach trivia that precedes the unit's first token.
    pub(crate) fn prepend(&mut self, mut nodes: Vec<Node>) {
        nodes.append(&mut self.children);
        self.children = nodes;
    }

    /// Attach trivia that follows the unit's last token.
    pub(crate) fn extend_trailing(&mut self, mut nodes: Vec<Node>) {
        self.children.append(&mut nodes);
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a ClassifiedToken>) {
        for child in &self.children {
            child.collect_tokens(out);
        }
    }
}

/// Deepest delimiter nesting in a forest.
pub fn forest_depth(forest: &[StructuralUnit]) -> usize {
    forest.iter().map(StructuralUnit::depth).max().unwrap_or(0)
}
