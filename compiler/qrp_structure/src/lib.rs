//! QRParse structuring: groups a classified token stream into nested
//! structural units.
//!
//! - **Line**: a statement, closed by `;` (the `;` is its last leaf)
//! - **Collection**: `(` ... `)`, delimiters included
//! - **Block**: `{` ... `}`, delimiters included
//!
//! [`structure`] is strict and stops at the first delimiter error.
//! [`structure_recovering`] never fails: it keeps unmatched closers as
//! leaves, closes whatever is still open at the end and reports every
//! error next to the partial forest.
//!
//! Structuring is on demand: classification never depends on it, and a
//! structuring failure leaves the flat token list usable.

mod config;
mod delimiter;
mod error;
mod structurer;
mod unit;

pub use config::StructureConfig;
pub use delimiter::Delimiter;
pub use error::StructureError;
pub use structurer::Structurer;
pub use unit::{forest_depth, Node, StructuralUnit, UnitKind};

use qrp_ir::ClassifiedToken;

/// Structure a whole stream, failing on the first delimiter error.
pub fn structure<I>(tokens: I, config: StructureConfig) -> Result<Vec<StructuralUnit>, StructureError>
where
    I: IntoIterator<Item = ClassifiedToken>,
{
    let mut structurer = Structurer::new(config);
    for token in tokens {
        structurer.push(token)?;
    }
    structurer.finish()
}

/// A forest plus every error met while building it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Structured {
    pub forest: Vec<StructuralUnit>,
    pub errors: Vec<StructureError>,
}

impl Structured {
    /// Whether the stream was well-formed.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn depth(&self) -> usize {
        forest_depth(&self.forest)
    }
}

/// Structure a whole stream, recovering from delimiter errors.
pub fn structure_recovering<I>(tokens: I, config: StructureConfig) -> Structured
where
    I: IntoIterator<Item = ClassifiedToken>,
{
    let mut structurer = Structurer::new(config);
    let mut errors: Vec<StructureError> = tokens
        .into_iter()
        .filter_map(|token| structurer.push_recovering(token))
        .collect();
    let (forest, unterminated) = structurer.finish_recovering();
    errors.extend(unterminated);
    Structured { forest, errors }
}


#[cfg(test)]
mod test_helpers;
