//! Accumulated classifier output.

use std::ops::Index;

use super::ClassifiedToken;

/// The ordered sequence of classified tokens for one file.
///
/// Append-only: tokens are pushed in stream order and never removed or
/// reordered, so index order is source order.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<ClassifiedToken>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token, returning a reference to it in place.
    pub fn push(&mut self, token: ClassifiedToken) -> &ClassifiedToken {
        let index = self.tokens.len();
        self.tokens.push(token);
        &self.tokens[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ClassifiedToken> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&ClassifiedToken> {
        self.tokens.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedToken> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ClassifiedToken] {
        &self.tokens
    }

    #[inline]
    pub fn into_vec(self) -> Vec<ClassifiedToken> {
        self.tokens
    }

    /// Concatenated token text. For a complete stream this is the original
    /// file content.
    pub fn source_text(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text().len()).sum();
        let mut text = String::with_capacity(capacity);
        for token in &self.tokens {
            text.push_str(token.text());
        }
        text
    }

    /// Runs of consecutive tokens that start on the same line.
    ///
    /// A multi-line token belongs to the line it starts on.
    pub fn lines(&self) -> impl Iterator<Item = &[ClassifiedToken]> {
        self.tokens
            .chunk_by(|a, b| a.position().line == b.position().line)
    }

    /// Tokens that are neither whitespace nor comments.
    pub fn significant(&self) -> impl Iterator<Item = &ClassifiedToken> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }
}

impl Index<usize> for TokenList {
    type Output = ClassifiedToken;

    #[inline]
    fn index(&self, index: usize) -> &ClassifiedToken {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a ClassifiedToken;
    type IntoIter = std::slice::Iter<'a, ClassifiedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = ClassifiedToken;
    type IntoIter = std::vec::IntoIter<ClassifiedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<ClassifiedToken> for TokenList {
    fn from_iter<I: IntoIterator<Item = ClassifiedToken>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
