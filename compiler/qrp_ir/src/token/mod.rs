//! Token types: raw input pairs, classified output tokens and their kinds.

mod kind;
mod list;
mod well_known;

pub use kind::{
    CommentKind, Flavour, KeywordKind, LiteralKind, NameKind, NumberKind, OperatorKind,
    PunctuationKind, TextKind, TokenKind, TYPE_PATH_ROOT,
};
pub use list::TokenList;
pub use well_known::WellKnown;

use std::fmt;

use crate::Position;

/// An unclassified token as produced by a generic lexer: a dotted type path
/// (`Token.Keyword.Declaration`) and the exact source text it covers.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    type_path: String,
    text: String,
}

impl RawToken {
    pub fn new(type_path: impl Into<String>, text: impl Into<String>) -> Self {
        RawToken {
            type_path: type_path.into(),
            text: text.into(),
        }
    }

    #[inline]
    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split into `(type_path, text)`.
    pub fn into_parts(self) -> (String, String) {
        (self.type_path, self.text)
    }
}

impl<P: Into<String>, T: Into<String>> From<(P, T)> for RawToken {
    fn from((type_path, text): (P, T)) -> Self {
        RawToken::new(type_path, text)
    }
}

/// A token with its resolved kind, raw text and start position.
///
/// Built in one step by [`ClassifiedToken::new`] and immutable afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassifiedToken {
    kind: TokenKind,
    text: String,
    position: Position,
}

impl ClassifiedToken {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        ClassifiedToken {
            kind,
            text: text.into(),
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the first character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// The well-known shape of this token, if it has one.
    pub fn well_known(&self) -> Option<WellKnown> {
        WellKnown::of(self.kind, &self.text)
    }
}

/// `"text"@L{line}:{column}`
impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.text, self.position)
    }
}
