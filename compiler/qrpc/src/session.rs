//! Per-file processing session.
//!
//! A session owns everything mutable for one file: the classifier's
//! cursor and token list. Sessions share nothing but the read-only
//! taxonomy, so files can be processed on any thread.

use qrp_diagnostic::Diagnostic;
use qrp_ir::{RawToken, TokenList};
use qrp_lexer::{ClassifyError, Classifier, Taxonomy};
use qrp_structure::{structure, structure_recovering, Structured};

use crate::config::DriverConfig;

pub struct Session<'t> {
    name: String,
    config: DriverConfig,
    classifier: Classifier<'t>,
}

/// Everything a session produced for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutput {
    pub name: String,
    pub tokens: TokenList,
    /// Present when structuring was requested. In strict mode a failure
    /// yields an empty forest and the single error.
    pub structure: Option<Structured>,
}

impl FileOutput {
    /// Structuring errors as diagnostics for this file. When `recovered`,
    /// the forest was still built and they are reported as warnings.
    pub fn diagnostics(&self, recovered: bool) -> Vec<Diagnostic> {
        self.structure
            .iter()
            .flat_map(|structured| &structured.errors)
            .map(|err| {
                let diagnostic = err.to_diagnostic().in_file(self.name.as_str());
                if recovered {
                    diagnostic.recovered()
                } else {
                    diagnostic
                }
            })
            .collect()
    }
}

impl<'t> Session<'t> {
    pub fn new(name: impl Into<String>, taxonomy: &'t Taxonomy, config: DriverConfig) -> Self {
        Session {
            name: name.into(),
            config,
            classifier: Classifier::new(taxonomy),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classify one raw token.
    pub fn feed(&mut self, raw: RawToken) -> Result<(), ClassifyError> {
        self.classifier.classify(raw).map(|_| ())
    }

    /// Tokens classified so far.
    pub fn tokens(&self) -> &TokenList {
        self.classifier.tokens()
    }

    /// End classification, structuring the stream if configured.
    pub fn finish(self) -> FileOutput {
        let tokens = self.classifier.finish();
        let structure = self.config.structure.then(|| {
            let config = self.config.structure_config();
            let structured = if self.config.recover {
                structure_recovering(tokens.iter().cloned(), config)
            } else {
                match structure(tokens.iter().cloned(), config) {
                    Ok(forest) => Structured {
                        forest,
                        errors: Vec::new(),
                    },
                    Err(err) => Structured {
                        forest: Vec::new(),
                        errors: vec![err],
                    },
                }
            };
            for err in &structured.errors {
                tracing::warn!(file = self.name.as_str(), %err, "structuring error");
            }
            structured
        });
        tracing::debug!(
            file = self.name.as_str(),
            tokens = tokens.len(),
            structured = structure.is_some(),
            "session finished"
        );
        FileOutput {
            name: self.name,
            tokens,
            structure,
        }
    }
}
