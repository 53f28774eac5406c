use pretty_assertions::assert_eq;
use qrp_diagnostic::ErrorCode;
use qrp_ir::{ClassifiedToken, Position, PunctuationKind, TokenKind};

use super::StructureError;
use crate::Delimiter;

fn punct(text: &str, line: u32, column: u32) -> ClassifiedToken {
    ClassifiedToken::new(
        TokenKind::Punctuation(PunctuationKind::Unflavoured),
        text,
        Position::new(line, column),
    )
}

#[test]
fn mismatched_message_and_diagnostic() {
    let err = StructureError::MismatchedDelimiter {
        open: punct("(", 0, 1),
        close: punct("}", 0, 3),
        expected: Delimiter::Paren,
    };
    assert_eq!(
        err.to_string(),
        "mismatched `}` at L0:3: expected `)` to close the `(` from L0:1"
    );

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.primary_position(), Some(Position::new(0, 3)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.suggestions, vec!["replace `}` with `)`".to_owned()]);
}

#[test]
fn unterminated_message_and_diagnostic() {
    let err = StructureError::UnterminatedStructure {
        open: punct("{", 2, 4),
        delimiter: Delimiter::Brace,
        unclosed: 3,
    };
    assert_eq!(
        err.to_string(),
        "unterminated `{` opened at L2:4 (3 open at end of stream)"
    );

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.primary_position(), Some(Position::new(2, 4)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions, vec!["add `}` to close the brace".to_owned()]);
}

#[test]
fn single_unterminated_unit_has_no_note() {
    let err = StructureError::UnterminatedStructure {
        open: punct("(", 0, 0),
        delimiter: Delimiter::Paren,
        unclosed: 1,
    };
    assert!(err.to_diagnostic().notes.is_empty());
}

#[test]
fn unopened_message_and_diagnostic() {
    let err = StructureError::UnopenedDelimiter {
        close: punct(")", 1, 0),
        delimiter: Delimiter::Paren,
    };
    assert_eq!(err.to_string(), "unopened `)` at L1:0");
    assert_eq!(err.token().position(), Position::new(1, 0));
    assert_eq!(err.error_code(), ErrorCode::E1003);
    assert_eq!(
        err.to_diagnostic().suggestions,
        vec!["remove `)` or add a matching `(` before it".to_owned()]
    );
}
