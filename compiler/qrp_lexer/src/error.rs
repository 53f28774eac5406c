//! Classification error types.
//!
//! Three layers:
//! - [`TaxonomyError`]: the taxonomy table itself is invalid (load time)
//! - [`ResolveError`]: a type path has no classification (lookup time)
//! - [`ClassifyError`]: a [`ResolveError`] plus the cursor position at the
//!   failing token, which is what callers see

use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_ir::{Position, TYPE_PATH_ROOT};

use crate::taxonomy::FALLBACK_KEY;

/// A taxonomy table failed validation while being built.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy entry `{path}` does not start with `{}`", TYPE_PATH_ROOT)]
    MissingRoot { path: String },
    #[error("taxonomy entry `{path}` has an empty segment")]
    EmptySegment { path: String },
    #[error("taxonomy entry `{path}` is defined twice")]
    Duplicate { path: String },
    /// A path is used both as a terminal kind and as a prefix of other paths.
    #[error("taxonomy entry `{path}` is both a terminal kind and a branch")]
    LeafBranchConflict { path: String },
    #[error("taxonomy branch `{path}` has no `{}` fallback", FALLBACK_KEY)]
    MissingFallback { path: String },
    #[error("taxonomy entry `{path}` continues past the `{}` fallback key", FALLBACK_KEY)]
    FallbackNotTerminal { path: String },
}

impl TaxonomyError {
    /// The offending entry path.
    pub fn path(&self) -> &str {
        match self {
            TaxonomyError::MissingRoot { path }
            | TaxonomyError::EmptySegment { path }
            | TaxonomyError::Duplicate { path }
            | TaxonomyError::LeafBranchConflict { path }
            | TaxonomyError::MissingFallback { path }
            | TaxonomyError::FallbackNotTerminal { path } => path,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0003)
            .with_message(self.to_string())
            .with_note("the taxonomy is validated once, before any token is classified")
    }
}

/// A type path could not be resolved to a token kind.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The path does not start with the root marker.
    #[error("malformed type path `{path}`")]
    MalformedTypePath { path: String },
    /// No concrete entry and no fallback at the level where lookup stopped.
    ///
    /// `segment` is the first segment with no entry; `None` when the path
    /// ended on a branch without a fallback.
    #[error("no taxonomy entry for `{path}`")]
    UnresolvedTaxonomy {
        path: String,
        segment: Option<String>,
    },
}

impl ResolveError {
    pub fn path(&self) -> &str {
        match self {
            ResolveError::MalformedTypePath { path }
            | ResolveError::UnresolvedTaxonomy { path, .. } => path,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ResolveError::MalformedTypePath { .. } => ErrorCode::E0001,
            ResolveError::UnresolvedTaxonomy { .. } => ErrorCode::E0002,
        }
    }
}

/// Classification of a token failed. Fatal for the file being classified.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct ClassifyError {
    /// Cursor position when the failing token was offered.
    pub position: Position,
    #[source]
    pub kind: ResolveError,
}

impl ClassifyError {
    pub fn new(kind: ResolveError, position: Position) -> Self {
        ClassifyError { position, kind }
    }

    /// The offending type path.
    pub fn path(&self) -> &str {
        self.kind.path()
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self.kind, ResolveError::UnresolvedTaxonomy { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.position, "token starts here");

        match &self.kind {
            ResolveError::MalformedTypePath { .. } => diag.with_note(format!(
                "type paths are dotted segments starting with `{TYPE_PATH_ROOT}`"
            )),
            ResolveError::UnresolvedTaxonomy {
                segment: Some(segment),
                ..
            } => diag
                .with_note(format!(
                    "`{segment}` is not a known segment and its parent has no fallback"
                ))
                .with_suggestion("add an entry or a fallback for this path to the taxonomy"),
            ResolveError::UnresolvedTaxonomy { segment: None, .. } => diag
                .with_note("the path stops at a branch without a fallback")
                .with_suggestion("add a fallback for this branch to the taxonomy"),
        }
    }
}
