//! Error kinds for outcome failures

use std::fmt;

/// The kind of failure that occurred.
///
/// Callers can match on the kind to decide how to treat a failure without
/// inspecting its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to a function
    InvalidArgument,

    /// An operation was attempted in a state that does not allow it
    IllegalState,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// File or directory not found
    NotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Computation errors
    // =========================================================================
    /// Failed to parse input
    ParseFailed,

    /// A captured computation panicked
    Panicked,

    /// Context added on top of an underlying failure
    Wrapped,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::IllegalState => "IllegalState",

            // IO
            ErrorKind::NotFound => "NotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",

            // Computation
            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::Panicked => "Panicked",
            ErrorKind::Wrapped => "Wrapped",
        }
    }

    /// Check if this kind originates from the filesystem or another IO channel
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::IoFailed
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::Wrapped.to_string(), "Wrapped");
    }

    #[test]
    fn test_is_io() {
        assert!(ErrorKind::NotFound.is_io());
        assert!(ErrorKind::IoFailed.is_io());
        assert!(!ErrorKind::ParseFailed.is_io());
        assert!(!ErrorKind::Panicked.is_io());
    }
}
