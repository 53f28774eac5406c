//! Fixed token shapes: a flavour plus an exact text.
//!
//! Structuring keys on these rather than on raw text alone, so a `;` inside
//! a string literal or comment is never mistaken for a separator.

use super::{KeywordKind, PunctuationKind, TextKind, TokenKind};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WellKnown {
    Private,
    Public,
    Final,
    Static,
    Class,
    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Space,
}

impl WellKnown {
    pub const ALL: [WellKnown; 11] = [
        WellKnown::Private,
        WellKnown::Public,
        WellKnown::Final,
        WellKnown::Static,
        WellKnown::Class,
        WellKnown::Semicolon,
        WellKnown::OpenBrace,
        WellKnown::CloseBrace,
        WellKnown::OpenParen,
        WellKnown::CloseParen,
        WellKnown::Space,
    ];

    /// The kind a generic lexer assigns to this shape.
    pub const fn kind(self) -> TokenKind {
        match self {
            WellKnown::Private
            | WellKnown::Public
            | WellKnown::Final
            | WellKnown::Static
            | WellKnown::Class => TokenKind::Keyword(KeywordKind::Declaration),
            WellKnown::Semicolon
            | WellKnown::OpenBrace
            | WellKnown::CloseBrace
            | WellKnown::OpenParen
            | WellKnown::CloseParen => TokenKind::Punctuation(PunctuationKind::Unflavoured),
            WellKnown::Space => TokenKind::Text(TextKind::Whitespace),
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            WellKnown::Private => "private",
            WellKnown::Public => "public",
            WellKnown::Final => "final",
            WellKnown::Static => "static",
            WellKnown::Class => "class",
            WellKnown::Semicolon => ";",
            WellKnown::OpenBrace => "{",
            WellKnown::CloseBrace => "}",
            WellKnown::OpenParen => "(",
            WellKnown::CloseParen => ")",
            WellKnown::Space => " ",
        }
    }

    /// Find the shape matching `kind` and `text`.
    ///
    /// Only the flavour has to agree: lexers differ in how finely they
    /// label punctuation and declaration keywords.
    pub fn of(kind: TokenKind, text: &str) -> Option<WellKnown> {
        WellKnown::ALL
            .into_iter()
            .find(|shape| shape.text() == text && shape.kind().flavour() == kind.flavour())
    }
}
