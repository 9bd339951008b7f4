//! # Outcome
//!
//! The success-or-failure container and its combinators.
//!
//! An `Outcome` is built once and never changes. Every combinator consumes
//! the instance and returns a new one, so a chain reads top to bottom and
//! ends with a single extraction.

use std::panic::{catch_unwind, UnwindSafe};

use outcome_error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::panic::Panic;

/// Either a successful value of type `S` or a failure of type `E`.
///
/// `E` defaults to [`outcome_error::Error`], which carries a message and an
/// optional chained cause. Any type can be used as the failure side; the
/// combinators place no bounds on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use = "an Outcome may hold a failure that should be handled"]
pub enum Outcome<S, E = Error> {
    /// The operation produced a value
    Success(S),
    /// The operation failed
    Failure(E),
}

use Outcome::{Failure, Success};

impl<S, E> Outcome<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a successful outcome
    pub fn success(value: S) -> Self {
        Success(value)
    }

    /// Create a failed outcome
    pub fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Run `f` once and capture what it returns.
    ///
    /// `Ok` becomes a success; an `Err` raised inside `f` (including through
    /// `?`) is converted into `E` and captured as a failure instead of being
    /// propagated.
    ///
    /// ```rust
    /// use outcome_core::{ErrorKind, Outcome};
    ///
    /// let missing: Outcome<String> = Outcome::from_fn(|| -> std::io::Result<String> {
    ///     let text = std::fs::read_to_string("/no/such/file")?;
    ///     Ok(text)
    /// });
    /// assert_eq!(missing.error().map(|e| e.kind()), Some(ErrorKind::NotFound));
    /// ```
    pub fn from_fn<F, X>(f: F) -> Self
    where
        F: FnOnce() -> Result<S, X>,
        X: Into<E>,
    {
        Self::lift(f())
    }

    /// Run `f` once, turning a panic into a failure.
    ///
    /// The installed panic hook still runs before the panic is caught, so
    /// the default hook prints the message to stderr.
    pub fn from_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> S + UnwindSafe,
        E: From<Panic>,
    {
        match catch_unwind(f) {
            Ok(value) => Success(value),
            Err(payload) => Self::captured_panic(payload),
        }
    }

    /// Run `f` once, capturing both a returned `Err` and a panic.
    pub fn catching<F, X>(f: F) -> Self
    where
        F: FnOnce() -> Result<S, X> + UnwindSafe,
        X: Into<E>,
        E: From<Panic>,
    {
        match catch_unwind(f) {
            Ok(result) => Self::lift(result),
            Err(payload) => Self::captured_panic(payload),
        }
    }

    fn lift<X: Into<E>>(result: Result<S, X>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error.into()),
        }
    }

    fn captured_panic(payload: Box<dyn std::any::Any + Send>) -> Self
    where
        E: From<Panic>,
    {
        let panic = Panic::from_payload(payload);
        log::debug!("captured panic as failure: {}", panic.message());
        Failure(E::from(panic))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the outcome holds a value
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome holds a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrow the value, if there is one
    pub fn value(&self) -> Option<&S> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrow the failure, if there is one
    pub fn error(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Convert `&Outcome<S, E>` to `Outcome<&S, &E>`
    pub fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value.
    ///
    /// # Panics
    /// Panics if the outcome is a failure. Check with [`Outcome::is_success`]
    /// first, or use one of the total extractors.
    #[track_caller]
    pub fn get(self) -> S {
        match self {
            Success(value) => value,
            Failure(_) => panic!("attempted to retrieve value on failed outcome"),
        }
    }

    /// Returns the failure.
    ///
    /// # Panics
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn get_error(self) -> E {
        match self {
            Success(_) => panic!("attempted to retrieve error on successful outcome"),
            Failure(error) => error,
        }
    }

    /// Returns the value, or `default` on failure. The failure is dropped.
    pub fn get_or_else(self, default: S) -> S {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the failure.
    pub fn get_or_else_with<F>(self, f: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Hand the failure back to ordinary `?` propagation.
    ///
    /// ```rust
    /// use outcome_core::{Error, Outcome};
    ///
    /// fn port(raw: &str) -> outcome_error::Result<u16> {
    ///     let port = Outcome::<_, Error>::success(raw)
    ///         .try_map(|s| s.parse::<u16>())
    ///         .get_or_throw()?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port("443").unwrap(), 443);
    /// assert!(port("https").is_err());
    /// ```
    pub fn get_or_throw(self) -> Result<S, E> {
        self.into_result()
    }

    /// Returns the value as an `Option`, discarding any failure.
    pub fn as_optional(self) -> Option<S> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<S, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Apply a total function to the value. A failure passes through as is.
    ///
    /// # Panics
    /// A panic inside `f` is not captured and unwinds through `map`. Wrap
    /// the work in [`Outcome::from_unwind`] if `f` may panic.
    pub fn map<N, F>(self, f: F) -> Outcome<N, E>
    where
        F: FnOnce(S) -> N,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Apply a fallible function to the value.
    ///
    /// An `Err` returned by `f` becomes the new failure. A failure already
    /// held passes through untouched and `f` is not called.
    ///
    /// # Panics
    /// Only returned errors are captured; a panic inside `f` unwinds through
    /// `try_map`. Use [`Outcome::catching`] to capture both.
    pub fn try_map<N, F, X>(self, f: F) -> Outcome<N, E>
    where
        F: FnOnce(S) -> Result<N, X>,
        X: Into<E>,
    {
        match self {
            Success(value) => Outcome::lift(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the failure. A success passes through as is.
    pub fn map_error<F, G>(self, f: G) -> Outcome<S, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Wrap the failure with a message, keeping the original as the cause.
    ///
    /// Same as `map_error(|e| f(message.into(), e))`; the message is only
    /// converted when there is a failure to wrap.
    pub fn wrap_error<F, G, M>(self, f: G, message: M) -> Outcome<S, F>
    where
        G: FnOnce(String, E) -> F,
        M: Into<String>,
    {
        self.map_error(|error| f(message.into(), error))
    }

    /// Run `f` on the value, if any, and return the outcome unchanged.
    pub fn if_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the failure, if any, and return the outcome unchanged.
    pub fn if_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        Self::lift(result)
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}
