//! The main Error type for outcome

use crate::ErrorKind;
use std::fmt;

/// The default failure carried by an `Outcome`.
///
/// This error type provides:
/// - `kind`: What type of failure occurred
/// - `message`: Human-readable description
/// - `context`: Key-value pairs for debugging
/// - `source`: The chained cause (if any)
///
/// # Example
///
/// ```rust
/// use outcome_error::{Error, ErrorKind};
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = Error::wrapped("loading settings", Error::from(io))
///     .with_context("path", "settings.toml");
///
/// assert_eq!(err.kind(), ErrorKind::Wrapped);
/// assert_eq!(err.message(), "loading settings");
/// assert_eq!(err.root_cause().to_string(), "no such file");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// The innermost error of the cause chain, or `self` when there is none.
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        let mut current: &(dyn std::error::Error + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Display - one line: kind, message, context, then the cause of a wrap
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        if let Some(((first_key, first_value), rest)) = self.context.split_first() {
            write!(f, " ({}={}", first_key, first_value)?;
            for (key, value) in rest {
                write!(f, ", {}={}", key, value)?;
            }
            write!(f, ")")?;
        }

        // A wrap only adds context; the reason lives in the cause.
        if self.kind == ErrorKind::Wrapped {
            if let Some(source) = &self.source {
                write!(f, ": {}", source)?;
            }
        }

        Ok(())
    }
}

// =============================================================================
// Debug - multi-line, walks the whole cause chain
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.kind, self.message)?;

        for (key, value) in &self.context {
            writeln!(f, "    {} = {}", key, value)?;
        }

        let mut cause = std::error::Error::source(self);
        if cause.is_some() {
            writeln!(f)?;
            writeln!(f, "Caused by:")?;
        }
        let mut depth = 0;
        while let Some(err) = cause {
            writeln!(f, "    {}: {}", depth, err)?;
            cause = err.source();
            depth += 1;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Conversions from the failures `?` most often raises
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string()).set_source(err)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::parse_failed(err.to_string()).set_source(err)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::parse_failed(err.to_string()).set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    /// Create an Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an IllegalState error
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalState, message)
    }

    /// Create a ParseFailed error
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    /// Create a Panicked error from the panic message
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Panicked, message)
    }

    /// Wrap `cause` with an additional message, keeping it as the source.
    ///
    /// The argument order matches what `Outcome::wrap_error` passes, so this
    /// can be handed over directly: `outcome.wrap_error(Error::wrapped, "ctx")`.
    pub fn wrapped(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorKind::Wrapped, message).set_source(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ParseFailed, "not a number");
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.message(), "not a number");
        assert!(err.context().is_empty());
        assert!(err.source_ref().is_none());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::illegal_state("queue closed")
            .with_context("queue", "jobs")
            .with_context("pending", "3");

        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("queue", "jobs".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::parse_failed("invalid digit")
            .with_context("input", "4x2")
            .with_context("line", "7");

        let display = format!("{}", err);
        assert_eq!(display, "ParseFailed: invalid digit (input=4x2, line=7)");
    }

    #[test]
    fn test_wrapped_display_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let err = Error::wrapped("failed to list entry", io);

        assert_eq!(err.to_string(), "Wrapped: failed to list entry: Permission denied");
    }

    #[test]
    fn test_display_omits_cause_when_not_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(Error::from(io).to_string(), "IoFailed: boom");
    }

    #[test]
    fn test_debug_includes_source() {
        let err = Error::wrapped("reading config", Error::unexpected("disk on fire"));
        let debug = format!("{:?}", err);
        assert!(debug.starts_with("Wrapped: reading config\n"));
        assert!(debug.contains("Caused by:"));
        assert!(debug.contains("0: Unexpected: disk on fire"));
    }

    #[test]
    fn test_wrapped_keeps_cause() {
        let err = Error::wrapped("ctx", Error::parse_failed("uh oh"));

        assert_eq!(err.kind(), ErrorKind::Wrapped);
        assert_eq!(err.message(), "ctx");

        let cause = err
            .source_ref()
            .and_then(|s| s.downcast_ref::<Error>())
            .expect("cause should be an outcome Error");
        assert_eq!(cause.kind(), ErrorKind::ParseFailed);
        assert_eq!(cause.message(), "uh oh");
    }

    #[test]
    fn test_std_source_chain() {
        let err = Error::wrapped("outer", Error::wrapped("middle", Error::unexpected("inner")));

        let middle = err.source().expect("outer has a source");
        assert!(middle.to_string().contains("middle"));
        assert!(err.root_cause().to_string().contains("inner"));
    }

    #[test]
    fn test_root_cause_without_source() {
        let err = Error::unexpected("alone");
        assert_eq!(err.root_cause().to_string(), err.to_string());
    }

    #[test]
    fn test_from_io_error() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.source_ref().is_some());

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"));
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.kind(), ErrorKind::IoFailed);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_from_parse_errors() {
        let err = Error::from("yay".parse::<i32>().unwrap_err());
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert!(err
            .source_ref()
            .is_some_and(|s| s.downcast_ref::<std::num::ParseIntError>().is_some()));

        let err = Error::from("1.2.3".parse::<f64>().unwrap_err());
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(Error::unexpected("x").kind(), ErrorKind::Unexpected);
        assert_eq!(Error::invalid_argument("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::illegal_state("x").kind(), ErrorKind::IllegalState);
        assert_eq!(Error::panicked("x").kind(), ErrorKind::Panicked);
    }
}
