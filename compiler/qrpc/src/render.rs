//! Text renderings of classifier and structurer output.

use std::fmt;

use qrp_diagnostic::ErrorCode;
use qrp_ir::TokenList;
use qrp_lexer::Taxonomy;
use qrp_structure::{Node, StructuralUnit};

/// One output line per source line, each token as `"text"@L{line}:{column}`.
pub fn render_token_lines(tokens: &TokenList) -> String {
    let mut out = String::new();
    for line in tokens.lines() {
        let rendered: Vec<String> = line.iter().map(ToString::to_string).collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}

/// Indented outline of a forest: one line per unit and per leaf.
pub fn render_forest(forest: &[StructuralUnit]) -> String {
    Outline(forest).to_string()
}

struct Outline<'a>(&'a [StructuralUnit]);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|unit| write_unit(f, unit, 0))
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, unit: &StructuralUnit, depth: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{}", "", unit.kind(), indent = depth * 2)?;
    for child in unit.children() {
        match child {
            Node::Token(token) => writeln!(
                f,
                "{:indent$}{} {:?} @{}",
                "",
                token.kind(),
                token.text(),
                token.position(),
                indent = (depth + 1) * 2
            )?,
            Node::Unit(inner) => write_unit(f, inner, depth + 1)?,
        }
    }
    Ok(())
}

/// Every taxonomy entry as `path  kind`, sorted by path.
pub fn render_taxonomy(taxonomy: &Taxonomy) -> String {
    let entries = taxonomy.entries();
    let width = entries.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(path, kind)| format!("{path:width$}  {kind}\n"))
        .collect()
}

/// What an error code means and whether the file's output survives it.
pub fn render_explanation(code: ErrorCode) -> String {
    let effect = if code.is_recoverable() {
        "the classified tokens are still reported; with --recover the partial structure is too"
    } else {
        "the file produces no output"
    };
    format!("{code}: {}\n{effect}\n", code.description())
}
