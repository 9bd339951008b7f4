//! Panics captured by `Outcome::from_unwind` and `Outcome::catching`.

use std::any::Any;

use outcome_error::Error;

/// A panic caught at an outcome boundary, reduced to its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Extract the message from a `catch_unwind` payload.
    ///
    /// `panic!` produces either a `&'static str` or a `String` payload; anything
    /// else (from `std::panic::panic_any`) has no readable message.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }

    /// The panic message, as passed to `panic!`.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Panic> for Error {
    fn from(panic: Panic) -> Self {
        Error::panicked(panic.message.clone()).set_source(panic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome_error::ErrorKind;

    #[test]
    fn test_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        let panic = Panic::from_payload(payload);
        assert_eq!(panic.message(), "boom");
        assert_eq!(panic.to_string(), "computation panicked: boom");
    }

    #[test]
    fn test_string_payload() {
        let n = 7;
        let payload = std::panic::catch_unwind(|| panic!("bad index {}", n)).unwrap_err();
        assert_eq!(Panic::from_payload(payload).message(), "bad index 7");
    }

    #[test]
    fn test_opaque_payload() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(42_u8)).unwrap_err();
        assert_eq!(Panic::from_payload(payload).message(), "non-string panic payload");
    }

    #[test]
    fn test_into_error() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        let err = Error::from(Panic::from_payload(payload));

        assert_eq!(err.kind(), ErrorKind::Panicked);
        assert_eq!(err.message(), "boom");
        assert!(err
            .source_ref()
            .is_some_and(|s| s.downcast_ref::<Panic>().is_some()));
    }
}
