#![allow(clippy::unwrap_used, reason = "tests unwrap known-good input")]

use pretty_assertions::assert_eq;
use qrp_diagnostic::ErrorCode;
use qrp_ir::RawToken;

use super::{escape, parse_dump, write_dump, DumpError, DumpErrorKind, DumpReader};

#[test]
fn decodes_tokens_and_escapes() {
    let dump = "Token.Keyword.Declaration\tprivate\nToken.Text.Whitespace\t\\n\\t\nToken.Literal.String\t\"a\\\\b\"\n";
    let tokens = parse_dump(dump).unwrap();
    assert_eq!(
        tokens,
        vec![
            RawToken::new("Token.Keyword.Declaration", "private"),
            RawToken::new("Token.Text.Whitespace", "\n\t"),
            RawToken::new("Token.Literal.String", "\"a\\b\""),
        ]
    );
}

#[test]
fn skips_blank_and_comment_lines() {
    let dump = "# header\n\nToken.Name\tx\n   \n# trailer\n";
    assert_eq!(parse_dump(dump).unwrap(), vec![RawToken::new("Token.Name", "x")]);
}

#[test]
fn text_after_first_tab_is_kept_whole() {
    let tokens = parse_dump("Token.Text\ta\tb").unwrap();
    assert_eq!(tokens[0].text(), "a\tb");
}

#[test]
fn empty_text_is_allowed() {
    let tokens = parse_dump("Token.Text\t").unwrap();
    assert_eq!(tokens[0].text(), "");
}

#[test]
fn missing_tab_reports_line() {
    let err = parse_dump("Token.Name\tx\n\nToken.Name y\n").unwrap_err();
    assert_eq!(
        err,
        DumpError {
            line: 3,
            kind: DumpErrorKind::MissingTab
        }
    );
    assert_eq!(err.to_string(), "dump line 3: missing tab between type path and text");
}

#[test]
fn bad_escapes() {
    assert_eq!(
        parse_dump("Token.Name\t\\x").unwrap_err().kind,
        DumpErrorKind::UnknownEscape('x')
    );
    assert_eq!(
        parse_dump("Token.Name\tab\\").unwrap_err().kind,
        DumpErrorKind::TrailingBackslash
    );
}

#[test]
fn reader_is_lazy() {
    let mut reader = DumpReader::new("Token.Name\ta\nbroken\nToken.Name\tb\n");
    assert_eq!(reader.next(), Some(Ok(RawToken::new("Token.Name", "a"))));
    assert!(matches!(reader.next(), Some(Err(DumpError { line: 2, .. }))));
    assert_eq!(reader.next(), Some(Ok(RawToken::new("Token.Name", "b"))));
    assert_eq!(reader.next(), None);
}

#[test]
fn written_dump_reads_back() {
    let tokens = vec![
        RawToken::new("Token.Comment.Multiline", "/* a\r\n\tb */"),
        RawToken::new("Token.Literal.String", "\"C:\\\\x\""),
    ];
    assert_eq!(parse_dump(&write_dump(&tokens)).unwrap(), tokens);
    assert_eq!(escape("a\\b\n"), "a\\\\b\\n");
}

#[test]
fn diagnostic_code() {
    let diag = DumpError {
        line: 7,
        kind: DumpErrorKind::UnknownEscape('q'),
    }
    .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "unknown escape `\\q`");
    assert_eq!(diag.notes, vec!["at line 7 of the token dump".to_owned()]);
}
