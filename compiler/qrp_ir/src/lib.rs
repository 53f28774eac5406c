//! QRParse IR - token data model.
//!
//! This crate contains the data shared by every stage of the pipeline:
//! - `Position` for 0-based line/column coordinates
//! - `TokenKind` and its per-flavour enums for classified token kinds
//! - `RawToken` for unclassified `(type path, text)` pairs from a generic lexer
//! - `ClassifiedToken` and `TokenList` for classifier output
//! - `WellKnown` for the fixed token shapes structuring relies on
//!
//! Everything here is plain data: no I/O, no global state.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod token;

pub use position::Position;
pub use token::{
    ClassifiedToken, CommentKind, Flavour, KeywordKind, LiteralKind, NameKind, NumberKind,
    OperatorKind, PunctuationKind, RawToken, TextKind, TokenKind, TokenList, WellKnown,
    TYPE_PATH_ROOT,
};
