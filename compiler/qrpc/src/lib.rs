//! QRParse driver.
//!
//! Feeds raw tokens from a dump into a per-file [`Session`], and optionally
//! structures the result. Files are independent: each gets its own session
//! and only the read-only taxonomy is shared, so [`process_files`] can fan
//! out over rayon.

pub mod config;
pub mod dump;
mod error;
pub mod render;
mod session;
mod tracing_setup;

use std::fs;
use std::path::Path;

use qrp_lexer::Taxonomy;
use rayon::prelude::*;

pub use config::DriverConfig;
pub use dump::{parse_dump, DumpError, DumpErrorKind, DumpReader};
pub use error::DriverError;
pub use session::{FileOutput, Session};
pub use tracing_setup::{init_tracing, LOG_VAR};

/// Classify (and optionally structure) one dump held in memory.
///
/// Stops at the first malformed dump line or unclassifiable token.
#[tracing::instrument(level = "debug", skip(input, taxonomy, config))]
pub fn process_dump(
    name: &str,
    input: &str,
    taxonomy: &Taxonomy,
    config: DriverConfig,
) -> Result<FileOutput, DriverError> {
    let mut session = Session::new(name, taxonomy, config);
    for raw in DumpReader::new(input) {
        let raw = raw.map_err(|source| DriverError::Dump {
            name: name.to_owned(),
            source,
        })?;
        session
            .feed(raw)
            .map_err(|source| DriverError::Classify {
                name: name.to_owned(),
                source,
            })?;
    }
    let output = session.finish();
    tracing::debug!("parsed {} tokens", output.tokens.len());
    Ok(output)
}

/// Read and process one dump file.
pub fn process_file(
    path: &Path,
    taxonomy: &Taxonomy,
    config: DriverConfig,
) -> Result<FileOutput, DriverError> {
    let input = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    process_dump(&path.display().to_string(), &input, taxonomy, config)
}

/// Process several dump files, in parallel when configured. Results come
/// back in input order.
pub fn process_files<P>(
    paths: &[P],
    taxonomy: &Taxonomy,
    config: DriverConfig,
) -> Vec<Result<FileOutput, DriverError>>
where
    P: AsRef<Path> + Sync,
{
    tracing::debug!(files = paths.len(), parallel = config.parallel, "processing files");
    if config.parallel && paths.len() > 1 {
        paths
            .par_iter()
            .map(|path| process_file(path.as_ref(), taxonomy, config))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| process_file(path.as_ref(), taxonomy, config))
            .collect()
    }
}
