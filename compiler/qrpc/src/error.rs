//! Driver errors: everything that stops one file from being classified.

use std::io;
use std::path::PathBuf;

use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_lexer::{ClassifyError, TaxonomyError};

use crate::dump::DumpError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {source}")]
    Dump {
        name: String,
        #[source]
        source: DumpError,
    },

    #[error("{name}: {source}")]
    Classify {
        name: String,
        #[source]
        source: ClassifyError,
    },

    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

impl DriverError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DriverError::Io { path, source } => Diagnostic::error(ErrorCode::E2002)
                .with_message(io_message(path, source))
                .in_file(path.display().to_string()),
            DriverError::Dump { name, source } => source.to_diagnostic().in_file(name.as_str()),
            DriverError::Classify { name, source } => {
                source.to_diagnostic().in_file(name.as_str())
            }
            DriverError::Taxonomy(err) => err.to_diagnostic(),
        }
    }
}

fn io_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file `{path}`"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading `{path}`"),
        io::ErrorKind::InvalidData => format!("`{path}` contains invalid UTF-8 data"),
        _ => format!("error reading `{path}`: {err}"),
    }
}
