//! Raw-token dump format: the input boundary between an external lexer
//! and the driver.
//!
//! One token per line, `<type path>\t<escaped text>`:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! Token.Keyword.Declaration	private
//! Token.Text.Whitespace	\n
//! ```
//!
//! Text escapes are `\\`, `\n`, `\r` and `\t`; nothing else may follow a
//! backslash. Everything after the first tab is text, so a text may itself
//! contain (escaped or literal) tabs.

use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_ir::RawToken;

/// A malformed dump line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("dump line {line}: {kind}")]
pub struct DumpError {
    /// 1-based line in the dump.
    pub line: usize,
    pub kind: DumpErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DumpErrorKind {
    #[error("missing tab between type path and text")]
    MissingTab,
    #[error("unknown escape `\\{0}`")]
    UnknownEscape(char),
    #[error("text ends with a lone backslash")]
    TrailingBackslash,
}

impl DumpError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorCode::E2001)
            .with_message(self.kind.to_string())
            .with_note(format!("at line {} of the token dump", self.line));
        match self.kind {
            DumpErrorKind::MissingTab => {
                diag.with_suggestion("separate the type path and the text with a tab")
            }
            DumpErrorKind::UnknownEscape(_) | DumpErrorKind::TrailingBackslash => {
                diag.with_suggestion("write a literal backslash as `\\\\`")
            }
        }
    }
}

/// Lazily decodes a dump, one raw token per item.
pub struct DumpReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> DumpReader<'a> {
    pub fn new(input: &'a str) -> Self {
        DumpReader {
            lines: input.lines().enumerate(),
        }
    }
}

impl Iterator for DumpReader<'_> {
    type Item = Result<RawToken, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = index + 1;
            return Some(decode_line(line).map_err(|kind| DumpError {
                line: line_number,
                kind,
            }));
        }
        None
    }
}

/// Decode a whole dump.
pub fn parse_dump(input: &str) -> Result<Vec<RawToken>, DumpError> {
    DumpReader::new(input).collect()
}

fn decode_line(line: &str) -> Result<RawToken, DumpErrorKind> {
    let (type_path, text) = line.split_once('\t').ok_or(DumpErrorKind::MissingTab)?;
    Ok(RawToken::new(type_path, unescape(text)?))
}

fn unescape(text: &str) -> Result<String, DumpErrorKind> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => return Err(DumpErrorKind::UnknownEscape(other)),
            None => return Err(DumpErrorKind::TrailingBackslash),
        }
    }
    Ok(out)
}

/// Escape token text for a dump line.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Encode raw tokens as a dump.
pub fn write_dump<'a>(tokens: impl IntoIterator<Item = &'a RawToken>) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(token.type_path());
        out.push('\t');
        out.push_str(&escape(token.text()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
