//! # outcome-error
//!
//! The default failure type carried by `outcome_core::Outcome`.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what went wrong (e.g., ParseFailed, IoFailed)
//! - **Message**: Human-readable description
//! - **Context**: Key-value pairs that help locate the cause
//! - **Source**: The chained cause, kept intact when a failure is wrapped
//!
//! ## Usage
//!
//! ```rust
//! use outcome_error::{Error, ErrorKind};
//!
//! fn example() -> outcome_error::Result<u16> {
//!     "8080x".parse::<u16>().map_err(|e| {
//!         Error::parse_failed("port is not a number")
//!             .with_context("input", "8080x")
//!             .set_source(e)
//!     })
//! }
//!
//! let err = example().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ParseFailed);
//! assert!(err.source_ref().is_some());
//! ```
//!
//! ## Principles
//!
//! - A failure is created once; later stages wrap it with `Error::wrapped`
//!   or append context, they never replace the original cause
//! - External errors are attached with `set_source(err)`

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the outcome Error
pub type Result<T> = std::result::Result<T, Error>;
