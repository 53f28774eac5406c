//! Helpers for structuring tests: a toy lexer and a compact forest shape.

#![allow(clippy::unwrap_used)]

use qrp_ir::{ClassifiedToken, Flavour, RawToken};
use qrp_lexer::{classify_stream, Taxonomy};

use crate::{Node, StructuralUnit};

const PUNCTUATION: &str = "(){};,";

fn is_word(c: char) -> bool {
    !c.is_whitespace() && !PUNCTUATION.contains(c) && c != '"'
}

/// Split `src` into whitespace runs, words, single punctuation marks and
/// `"..."` strings, then classify with the standard taxonomy.
pub(crate) fn lex(src: &str) -> Vec<ClassifiedToken> {
    let mut raw = Vec::new();
    let mut rest = src;
    while let Some(c) = rest.chars().next() {
        let (path, len) = if c.is_whitespace() {
            let len = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            ("Token.Text.Whitespace", len)
        } else if PUNCTUATION.contains(c) {
            ("Token.Punctuation", c.len_utf8())
        } else if c == '"' {
            let len = rest[1..].find('"').map_or(rest.len(), |end| end + 2);
            ("Token.Literal.String.Double", len)
        } else {
            let len = rest.find(|c: char| !is_word(c)).unwrap_or(rest.len());
            ("Token.Name", len)
        };
        raw.push(RawToken::new(path, &rest[..len]));
        rest = &rest[len..];
    }
    classify_stream(Taxonomy::standard().unwrap(), raw)
        .unwrap()
        .into_vec()
}

/// Compact outline: `Line(a ;)`, `Block({ ... })`; whitespace shows as `·`.
pub(crate) fn shape(forest: &[StructuralUnit]) -> String {
    forest.iter().map(unit_shape).collect::<Vec<_>>().join(" ")
}

fn unit_shape(unit: &StructuralUnit) -> String {
    let children: Vec<String> = unit
        .children()
        .iter()
        .map(|child| match child {
            Node::Token(token) if token.kind().flavour() == Flavour::Text => "·".to_owned(),
            Node::Token(token) => token.text().to_owned(),
            Node::Unit(unit) => unit_shape(unit),
        })
        .collect();
    format!("{}({})", unit.kind(), children.join(" "))
}

/// Leaf tokens of a forest, in order.
pub(crate) fn flatten(forest: &[StructuralUnit]) -> Vec<ClassifiedToken> {
    forest
        .iter()
        .flat_map(StructuralUnit::tokens)
        .cloned()
        .collect()
}
