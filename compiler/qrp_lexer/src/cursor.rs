//! Line/column cursor advanced by token text.
//!
//! Columns count characters, not bytes. A token containing line separators
//! moves the cursor down by the number of separators and resets the column
//! to 0, even when text follows the last separator.

use qrp_ir::Position;

/// Line separator recognised by the cursor.
pub const LINE_SEPARATOR: char = '\n';

/// Session-scoped position state. Starts at line 0, column 0.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub const fn new() -> Self {
        Cursor {
            position: Position::START,
        }
    }

    /// Position the next token will start at.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Return the position before `text`, then move past it.
    pub fn advance(&mut self, text: &str) -> Position {
        let start = self.position;
        let separators = text.matches(LINE_SEPARATOR).count();
        if separators > 0 {
            self.position.line = self.position.line.saturating_add(saturate(separators));
            self.position.column = 0;
        } else {
            self.position.column = self
                .position
                .column
                .saturating_add(saturate(text.chars().count()));
        }
        start
    }
}

fn saturate(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
