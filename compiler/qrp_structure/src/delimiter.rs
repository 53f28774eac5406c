//! Structural roles of tokens.

use std::fmt;

use qrp_ir::{ClassifiedToken, WellKnown};

use crate::unit::UnitKind;

/// A delimiter pair that opens a nested unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Delimiter {
    /// `(` / `)`, opens a [`UnitKind::Collection`].
    Paren,
    /// `{` / `}`, opens a [`UnitKind::Block`].
    Brace,
}

impl Delimiter {
    pub const fn unit_kind(self) -> UnitKind {
        match self {
            Delimiter::Paren => UnitKind::Collection,
            Delimiter::Brace => UnitKind::Block,
        }
    }

    pub const fn open(self) -> &'static str {
        match self {
            Delimiter::Paren => WellKnown::OpenParen.text(),
            Delimiter::Brace => WellKnown::OpenBrace.text(),
        }
    }

    pub const fn close(self) -> &'static str {
        match self {
            Delimiter::Paren => WellKnown::CloseParen.text(),
            Delimiter::Brace => WellKnown::CloseBrace.text(),
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Delimiter::Paren => "parenthesis",
            Delimiter::Brace => "brace",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a token does to the structure.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Role {
    Open(Delimiter),
    Close(Delimiter),
    /// Statement separator `;`.
    Separator,
    Leaf,
}

impl Role {
    /// Delimiters and separators are recognised by shape (punctuation
    /// flavour plus exact text), never by text alone.
    pub(crate) fn of(token: &ClassifiedToken) -> Role {
        match token.well_known() {
            Some(WellKnown::OpenParen) => Role::Open(Delimiter::Paren),
            Some(WellKnown::OpenBrace) => Role::Open(Delimiter::Brace),
            Some(WellKnown::CloseParen) => Role::Close(Delimiter::Paren),
            Some(WellKnown::CloseBrace) => Role::Close(Delimiter::Brace),
            Some(WellKnown::Semicolon) => Role::Separator,
            _ => Role::Leaf,
        }
    }
}
