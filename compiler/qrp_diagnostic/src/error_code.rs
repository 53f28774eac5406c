use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Classification (taxonomy) errors
/// - E1xxx: Structuring errors
/// - E2xxx: Driver input errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Classification Errors (E0xxx)
    /// Type path does not start with the taxonomy root
    E0001,
    /// No concrete or fallback taxonomy entry for a type path
    E0002,
    /// Taxonomy configuration failed validation
    E0003,

    // Structuring Errors (E1xxx)
    /// Closing delimiter does not match the innermost open unit
    E1001,
    /// Stream ended with open units
    E1002,
    /// Closing delimiter with no open unit
    E1003,

    // Driver Errors (E2xxx)
    /// Malformed raw-token dump line
    E2001,
    /// I/O failure reading input
    E2002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// Short description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "malformed type path",
            ErrorCode::E0002 => "unresolved taxonomy",
            ErrorCode::E0003 => "invalid taxonomy",
            ErrorCode::E1001 => "mismatched delimiter",
            ErrorCode::E1002 => "unterminated structure",
            ErrorCode::E1003 => "unopened delimiter",
            ErrorCode::E2001 => "malformed token dump",
            ErrorCode::E2002 => "input unreadable",
        }
    }

    /// Whether a file with this error still has a usable classified stream.
    ///
    /// Classification errors abort the file; structuring errors only
    /// invalidate the grouping.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    /// Parse a code such as `E1002`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
