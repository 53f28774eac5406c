//! Structuring errors.
//!
//! These are per-file and recoverable: the flat token list stays valid
//! whatever happens here.

use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_ir::ClassifiedToken;

use crate::delimiter::Delimiter;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StructureError {
    /// A closing delimiter does not match the innermost open unit.
    #[error(
        "mismatched `{}` at {}: expected `{}` to close the `{}` from {}",
        .close.text(), .close.position(), .expected.close(), .open.text(), .open.position()
    )]
    MismatchedDelimiter {
        /// Opener of the innermost open unit.
        open: ClassifiedToken,
        /// The offending closer.
        close: ClassifiedToken,
        /// Delimiter of the innermost open unit.
        expected: Delimiter,
    },

    /// The stream ended with units still open.
    #[error(
        "unterminated `{}` opened at {} ({} open at end of stream)",
        .open.text(), .open.position(), .unclosed
    )]
    UnterminatedStructure {
        /// Opener of the innermost unit left open.
        open: ClassifiedToken,
        delimiter: Delimiter,
        /// How many units were still open.
        unclosed: usize,
    },

    /// A closing delimiter with no open unit at all.
    #[error("unopened `{}` at {}", .close.text(), .close.position())]
    UnopenedDelimiter {
        close: ClassifiedToken,
        delimiter: Delimiter,
    },
}

impl StructureError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            StructureError::MismatchedDelimiter { .. } => ErrorCode::E1001,
            StructureError::UnterminatedStructure { .. } => ErrorCode::E1002,
            StructureError::UnopenedDelimiter { .. } => ErrorCode::E1003,
        }
    }

    /// The token the error points at.
    pub fn token(&self) -> &ClassifiedToken {
        match self {
            StructureError::MismatchedDelimiter { close, .. }
            | StructureError::UnopenedDelimiter { close, .. } => close,
            StructureError::UnterminatedStructure { open, .. } => open,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code()).with_message(self.to_string());
        match self {
            StructureError::MismatchedDelimiter {
                open,
                close,
                expected,
            } => diag
                .with_label(
                    close.position(),
                    format!("expected `{}` here", expected.close()),
                )
                .with_secondary_label(
                    open.position(),
                    format!("the {expected} was opened here"),
                )
                .with_suggestion(format!(
                    "replace `{}` with `{}`",
                    close.text(),
                    expected.close()
                )),
            StructureError::UnterminatedStructure {
                open,
                delimiter,
                unclosed,
            } => {
                let diag = diag
                    .with_label(open.position(), format!("this {delimiter} is never closed"))
                    .with_suggestion(format!(
                        "add `{}` to close the {delimiter}",
                        delimiter.close()
                    ));
                if *unclosed > 1 {
                    diag.with_note(format!("{unclosed} units are open at the end of the stream"))
                } else {
                    diag
                }
            }
            StructureError::UnopenedDelimiter { close, delimiter } => diag
                .with_label(close.position(), "no open unit to close")
                .with_suggestion(format!(
                    "remove `{}` or add a matching `{}` before it",
                    close.text(),
                    delimiter.open()
                )),
        }
    }
}

#[cfg(test)]
mod tests;
