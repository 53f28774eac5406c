//! Source coordinates.
//!
//! Positions are 0-based on both axes. Columns count characters, not bytes,
//! since raw token text arrives as decoded strings.

use std::fmt;

/// Line/column coordinate of a token's first character.
///
/// Ordering is line-major, so positions of a classified stream sort in
/// stream order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The start of a file.
    pub const START: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// 1-based `(line, column)` as editors and terminals expect.
    #[inline]
    pub const fn one_based(self) -> (u32, u32) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}:{}", self.line, self.column)
    }
}

impl From<(u32, u32)> for Position {
    fn from((line, column): (u32, u32)) -> Self {
        Position { line, column }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}

#[cfg(test)]
mod tests;
