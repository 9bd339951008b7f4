//! # outcome-core
//!
//! A value that is either a successful result or a failure reason, never both
//! and never neither.
//!
//! ## Core Concepts
//! - **Outcome**: `Success(S) | Failure(E)`, immutable once built
//! - **Capture**: `from_fn`, `from_unwind` and `catching` turn raised errors
//!   and panics into a `Failure` value
//! - **Combinators**: `map`, `try_map`, `map_error`, `wrap_error` build a new
//!   outcome and leave the other side untouched
//! - **Extraction**: `get`, `get_or_else`, `get_or_throw`, `as_optional` end
//!   a chain
//!
//! ```rust
//! use outcome_core::{Error, ErrorKind, Outcome};
//!
//! let port = Outcome::<&str>::success("80x")
//!     .try_map(|s| s.parse::<u16>())
//!     .wrap_error(Error::wrapped, "reading port");
//!
//! assert!(port.is_failure());
//! assert_eq!(port.error().map(|e| e.kind()), Some(ErrorKind::Wrapped));
//! assert_eq!(port.get_or_else(8080), 8080);
//! ```

pub mod outcome;
pub mod panic;

pub use outcome::Outcome;
pub use outcome_error::{Error, ErrorKind};
pub use panic::Panic;
