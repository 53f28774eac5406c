#![allow(clippy::unwrap_used, reason = "tests unwrap known-good input")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use qrp_ir::{
    CommentKind, KeywordKind, LiteralKind, NameKind, NumberKind, Position, PunctuationKind,
    RawToken, TextKind, TokenKind,
};

use super::Classifier;
use crate::error::ResolveError;
use crate::taxonomy::Taxonomy;
use crate::{classify_stream, STANDARD_ENTRIES};

fn taxonomy() -> &'static Taxonomy {
    Taxonomy::standard().unwrap()
}

fn raw(pairs: &[(&str, &str)]) -> Vec<RawToken> {
    pairs.iter().map(|&pair| RawToken::from(pair)).collect()
}

fn private_x() -> Vec<RawToken> {
    raw(&[
        ("Token.Keyword.Declaration", "private"),
        ("Token.Text.Whitespace", " "),
        ("Token.Name", "x"),
        ("Token.Punctuation", ";"),
    ])
}

#[test]
fn classifies_kinds_and_start_positions() {
    let tokens = classify_stream(taxonomy(), private_x()).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(KeywordKind::Declaration),
            TokenKind::Text(TextKind::Whitespace),
            TokenKind::Name(NameKind::Unflavoured),
            TokenKind::Punctuation(PunctuationKind::Unflavoured),
        ]
    );

    let positions: Vec<Position> = tokens.iter().map(|t| t.position()).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 0),
            Position::new(0, 7),
            Position::new(0, 8),
            Position::new(0, 9),
        ]
    );
}

#[test]
fn classify_returns_the_appended_token() {
    let mut classifier = Classifier::new(taxonomy());
    let token = classifier
        .classify(RawToken::new("Token.Literal.Number.Integer", "42"))
        .unwrap()
        .clone();
    assert_eq!(
        token.kind(),
        TokenKind::Literal(LiteralKind::Number(NumberKind::Integer))
    );
    assert_eq!(token.text(), "42");
    assert_eq!(classifier.tokens().last(), Some(&token));
    assert_eq!(classifier.position(), Position::new(0, 2));
}

#[test]
fn multiline_token_moves_following_positions() {
    let tokens = classify_stream(
        taxonomy(),
        raw(&[
            ("Token.Comment.Multiline", "/**\n * doc\n */"),
            ("Token.Text.Whitespace", "\n"),
            ("Token.Keyword.Declaration", "class"),
        ]),
    )
    .unwrap();
    assert_eq!(tokens[0].kind(), TokenKind::Comment(CommentKind::Multiline));
    assert_eq!(tokens[1].position(), Position::new(2, 0));
    assert_eq!(tokens[2].position(), Position::new(3, 0));
}

#[test]
fn unresolved_fails_at_prior_cursor_position() {
    let mut classifier = Classifier::new(taxonomy());
    classifier.classify_all(private_x()).unwrap();

    let err = classifier
        .classify(RawToken::new("Token.Unknown", "?"))
        .unwrap_err();
    assert_eq!(err.position, Position::new(0, 10));
    assert!(matches!(
        err.kind,
        ResolveError::UnresolvedTaxonomy { ref path, .. } if path == "Token.Unknown"
    ));

    // Nothing is appended and the cursor stays put.
    assert_eq!(classifier.tokens().len(), 4);
    assert_eq!(classifier.position(), Position::new(0, 10));
}

#[test]
fn malformed_path_is_reported_as_malformed() {
    let err = classify_stream(
        taxonomy(),
        raw(&[("Token.Name", "a"), ("Name.Class", "B")]),
    )
    .unwrap_err();
    assert_eq!(err.position, Position::new(0, 1));
    assert_eq!(
        err.kind,
        ResolveError::MalformedTypePath {
            path: "Name.Class".to_owned()
        }
    );
}

#[test]
fn classify_all_stops_at_first_failure() {
    let mut classifier = Classifier::new(taxonomy());
    let result = classifier.classify_all(raw(&[
        ("Token.Name", "a"),
        ("Token.Bogus", "b"),
        ("Token.Name", "c"),
    ]));
    assert!(result.is_err());
    assert_eq!(classifier.finish().len(), 1);
}

#[test]
fn sessions_do_not_share_state() {
    let first = classify_stream(taxonomy(), private_x()).unwrap();
    let second = classify_stream(taxonomy(), private_x()).unwrap();
    assert_eq!(first, second);
    assert_eq!(second[0].position(), Position::START);
}

#[test]
fn empty_stream() {
    let tokens = classify_stream(taxonomy(), Vec::new()).unwrap();
    assert!(tokens.is_empty());
}

// === Property tests ===

/// Paths the standard table resolves, some only through fallbacks.
fn known_path() -> impl Strategy<Value = String> {
    let mut paths: Vec<String> = STANDARD_ENTRIES
        .iter()
        .map(|&(path, _)| path.trim_end_matches("._").to_owned())
        .collect();
    paths.push("Token.Keyword.Whatever".to_owned());
    paths.push("Token.Literal.String.Double".to_owned());
    proptest::sample::select(paths)
}

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('x'), Just(' '), Just('\n'), Just(';'), Just('ü')],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn text_round_trips(pairs in proptest::collection::vec((known_path(), text()), 0..40)) {
        let source: String = pairs.iter().map(|(_, text)| text.as_str()).collect();
        let raw: Vec<RawToken> = pairs.into_iter().map(RawToken::from).collect();
        let tokens = classify_stream(taxonomy(), raw).unwrap();
        prop_assert_eq!(tokens.source_text(), source);
    }

    #[test]
    fn kind_matches_resolution(path in known_path(), text in text()) {
        let expected = taxonomy().resolve(&path).unwrap();
        let mut classifier = Classifier::new(taxonomy());
        let token = classifier.classify(RawToken::new(path.as_str(), text)).unwrap();
        prop_assert_eq!(token.kind(), expected);
        prop_assert_eq!(token.kind().flavour().segment(), path.split('.').nth(1).unwrap());
    }

    #[test]
    fn positions_follow_text(pairs in proptest::collection::vec((known_path(), text()), 1..40)) {
        let raw: Vec<RawToken> = pairs.into_iter().map(RawToken::from).collect();
        let tokens = classify_stream(taxonomy(), raw).unwrap();
        for pair in tokens.as_slice().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let separators = prev.text().matches('\n').count();
            let width = prev.text().chars().count();
            if separators == 0 {
                prop_assert_eq!(next.position().line, prev.position().line);
                prop_assert_eq!(next.position().column as usize, prev.position().column as usize + width);
            } else {
                prop_assert_eq!(next.position().line as usize, prev.position().line as usize + separators);
                prop_assert_eq!(next.position().column, 0);
            }
        }
    }
}
