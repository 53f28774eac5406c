//! Token classifier: raw `(type path, text)` pairs to positioned tokens.
//!
//! A [`Classifier`] is one file's classification session. It owns the
//! cursor and the accumulated output; the taxonomy is borrowed and never
//! mutated, so any number of sessions can share one table.
//!
//! ```text
//! RawToken ─→ Taxonomy::resolve ─→ ClassifiedToken { kind, text, position }
//!                                        │
//!                          Cursor::advance(text)
//! ```

use qrp_ir::{ClassifiedToken, Position, RawToken, TokenList};

use crate::cursor::Cursor;
use crate::error::ClassifyError;
use crate::taxonomy::Taxonomy;

/// Classifies tokens for a single file.
///
/// Start a fresh classifier for every file: positions continue from
/// wherever the previous token left the cursor.
pub struct Classifier<'t> {
    taxonomy: &'t Taxonomy,
    cursor: Cursor,
    tokens: TokenList,
}

impl<'t> Classifier<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Classifier {
            taxonomy,
            cursor: Cursor::new(),
            tokens: TokenList::new(),
        }
    }

    /// Classify one raw token and append it to the output.
    ///
    /// The token's position is the cursor position before its text. On
    /// failure nothing is appended, the cursor does not move and the error
    /// carries the cursor position at the failing token.
    pub fn classify(&mut self, raw: RawToken) -> Result<&ClassifiedToken, ClassifyError> {
        let position = self.cursor.position();
        let kind = self
            .taxonomy
            .resolve(raw.type_path())
            .map_err(|err| ClassifyError::new(err, position))?;

        let (_, text) = raw.into_parts();
        let start = self.cursor.advance(&text);
        debug_assert_eq!(start, position);
        tracing::trace!(%kind, %position, text = text.as_str(), "classified token");

        Ok(self.tokens.push(ClassifiedToken::new(kind, text, position)))
    }

    /// Classify every token of `raw`, stopping at the first failure.
    pub fn classify_all<I>(&mut self, raw: I) -> Result<(), ClassifyError>
    where
        I: IntoIterator<Item = RawToken>,
    {
        for token in raw {
            self.classify(token)?;
        }
        Ok(())
    }

    /// Tokens classified so far.
    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Where the next token will start.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// End the session and take the classified tokens.
    pub fn finish(self) -> TokenList {
        tracing::debug!(tokens = self.tokens.len(), "classification finished");
        self.tokens
    }
}

#[cfg(test)]
mod tests;
