//! End-to-end tests: fixture dumps through the public driver API.

#![allow(clippy::unwrap_used, reason = "tests unwrap known-good fixtures")]

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_ir::{KeywordKind, NameKind, Position, PunctuationKind, TextKind, TokenKind};
use qrp_lexer::Taxonomy;
use qrp_structure::{forest_depth, StructureError, UnitKind};
use qrpc::{
    parse_dump, process_dump, process_file, process_files, DriverConfig, DriverError,
    DumpErrorKind,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn taxonomy() -> &'static Taxonomy {
    Taxonomy::standard().unwrap()
}

fn classify_only() -> DriverConfig {
    DriverConfig::default()
}

fn structured(keep_trivia: bool) -> DriverConfig {
    DriverConfig::default()
        .with_structure(true)
        .with_keep_trivia(keep_trivia)
}

#[test]
fn declaration_kinds_and_positions() {
    let output = process_file(&fixture("declaration.dump"), taxonomy(), classify_only()).unwrap();
    let summary: Vec<(TokenKind, Position)> = output
        .tokens
        .iter()
        .map(|t| (t.kind(), t.position()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Keyword(KeywordKind::Declaration), Position::new(0, 0)),
            (TokenKind::Text(TextKind::Whitespace), Position::new(0, 7)),
            (TokenKind::Name(NameKind::Unflavoured), Position::new(0, 8)),
            (TokenKind::Punctuation(PunctuationKind::Unflavoured), Position::new(0, 9)),
            (TokenKind::Text(TextKind::Whitespace), Position::new(0, 10)),
        ]
    );
    assert_eq!(output.structure, None);
}

#[test]
fn declaration_structures_to_one_line() {
    let output =
        process_file(&fixture("declaration.dump"), taxonomy(), structured(false)).unwrap();
    let forest = output.structure.unwrap().forest;
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].kind(), UnitKind::Line);
    assert_eq!(forest[0].text(), "privatex;");

    let lossless = process_file(&fixture("declaration.dump"), taxonomy(), structured(true))
        .unwrap()
        .structure
        .unwrap();
    assert_eq!(lossless.forest.len(), 1);
    assert_eq!(lossless.forest[0].leaf_count(), 5);
    assert_eq!(lossless.forest[0].text(), "private x;\n");
}

#[test]
fn class_round_trips_and_nests() {
    let path = fixture("class.dump");
    let input = std::fs::read_to_string(&path).unwrap();
    let expected_source: String = parse_dump(&input)
        .unwrap()
        .iter()
        .map(|raw| raw.text().to_owned())
        .collect();

    let output = process_file(&path, taxonomy(), structured(false)).unwrap();
    assert_eq!(output.tokens.source_text(), expected_source);

    let structured = output.structure.unwrap();
    assert!(structured.is_complete());
    let kinds: Vec<UnitKind> = structured.forest.iter().map(|u| u.kind()).collect();
    assert_eq!(kinds, vec![UnitKind::Line, UnitKind::Block]);
    assert_eq!(forest_depth(&structured.forest), 2);
}

#[test]
fn multiline_comment_moves_lines() {
    let output = process_file(&fixture("class.dump"), taxonomy(), classify_only()).unwrap();
    let comment = output
        .tokens
        .iter()
        .find(|t| t.kind().flavour() == qrp_ir::Flavour::Comment)
        .unwrap();
    // Column resets to 0 after a line break, whatever follows it in the token.
    assert_eq!(comment.position(), Position::new(1, 0));

    let private = output
        .tokens
        .iter()
        .find(|t| t.text() == "private")
        .unwrap();
    assert_eq!(private.position().line, 4);
}

#[test]
fn unterminated_is_reported_not_fatal() {
    let strict = process_file(&fixture("unterminated.dump"), taxonomy(), structured(true)).unwrap();
    assert_eq!(strict.tokens.len(), 3);
    assert!(strict.diagnostics(false).iter().any(Diagnostic::is_error));
    let errors = strict.structure.unwrap().errors;
    match &errors[..] {
        [StructureError::UnterminatedStructure { open, unclosed, .. }] => {
            assert_eq!(open.text(), "(");
            assert_eq!(open.position(), Position::new(0, 4));
            assert_eq!(*unclosed, 1);
        }
        other => panic!("unexpected errors: {other:?}"),
    }

    let recovered = process_file(
        &fixture("unterminated.dump"),
        taxonomy(),
        structured(true).with_recover(true),
    )
    .unwrap()
    .structure
    .unwrap();
    assert_eq!(recovered.forest.len(), 1);
    assert_eq!(recovered.errors.len(), 1);
}

#[test]
fn unknown_flavour_aborts_with_position() {
    let err = process_file(&fixture("unknown.dump"), taxonomy(), classify_only()).unwrap_err();
    match &err {
        DriverError::Classify { name, source } => {
            assert!(name.ends_with("unknown.dump"));
            assert!(source.is_unresolved());
            assert_eq!(source.path(), "Token.Unknown");
            assert_eq!(source.position, Position::new(1, 0));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert!(diag.file.unwrap().ends_with("unknown.dump"));
}

#[test]
fn malformed_dump_reports_dump_line() {
    let err = process_file(&fixture("malformed.dump"), taxonomy(), classify_only()).unwrap_err();
    match err {
        DriverError::Dump { source, .. } => {
            assert_eq!(source.line, 3);
            assert_eq!(source.kind, DumpErrorKind::MissingTab);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = process_file(&fixture("absent.dump"), taxonomy(), classify_only()).unwrap_err();
    assert!(matches!(err, DriverError::Io { .. }));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2002);
    assert!(diag.message.starts_with("cannot find file"));
}

#[test]
fn parallel_and_sequential_agree() {
    let paths = vec![
        fixture("declaration.dump"),
        fixture("class.dump"),
        fixture("unknown.dump"),
        fixture("unterminated.dump"),
    ];
    let config = structured(true).with_recover(true);
    let parallel = process_files(&paths, taxonomy(), config.with_parallel(true));
    let sequential = process_files(&paths, taxonomy(), config.with_parallel(false));

    assert_eq!(parallel.len(), paths.len());
    for (a, b) in parallel.iter().zip(&sequential) {
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("parallel and sequential results differ"),
        }
    }
    assert!(parallel[2].is_err());
}

#[test]
fn in_memory_dump() {
    let output = process_dump(
        "inline",
        "Token.Punctuation\t{\nToken.Name\ta\nToken.Punctuation\t;\nToken.Punctuation\t}\n",
        taxonomy(),
        structured(false),
    )
    .unwrap();
    let forest = output.structure.unwrap().forest;
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].kind(), UnitKind::Block);
    assert_eq!(forest_depth(&forest), 1);
}
