//! QRParse lexer layer: turns a generic lexer's `(type path, text)` pairs
//! into classified, positioned tokens.
//!
//! # Architecture
//!
//! ```text
//! (type path, text) → Taxonomy → TokenKind
//!                   → Cursor   → Position
//!                   → Classifier → TokenList
//! ```
//!
//! - [`Taxonomy`]: validated trie of type-path segments with per-branch
//!   fallbacks. The standard table is built once and shared.
//! - [`Cursor`]: 0-based line/column state advanced by token text.
//! - [`Classifier`]: one file's session. Owns its cursor and output.
//!
//! Classification failures ([`ClassifyError`]) are fatal for the file in
//! progress and carry the cursor position at the failing token.

mod classifier;
mod cursor;
mod error;
mod taxonomy;

pub use classifier::Classifier;
pub use cursor::{Cursor, LINE_SEPARATOR};
pub use error::{ClassifyError, ResolveError, TaxonomyError};
pub use taxonomy::{Taxonomy, FALLBACK_KEY, STANDARD_ENTRIES};

use qrp_ir::{RawToken, TokenList};

/// Classify a whole raw stream with a fresh session.
pub fn classify_stream<I>(taxonomy: &Taxonomy, raw: I) -> Result<TokenList, ClassifyError>
where
    I: IntoIterator<Item = RawToken>,
{
    let mut classifier = Classifier::new(taxonomy);
    classifier.classify_all(raw)?;
    Ok(classifier.finish())
}
