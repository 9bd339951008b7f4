//! `outcome parse`: turn text into a number, or explain why not.

use outcome_core::{Error, Outcome};

/// Parse `text` as a signed integer; surrounding whitespace is ignored.
pub fn parse_number(text: &str) -> Outcome<i64> {
    Outcome::<&str>::success(text)
        .try_map(|s| s.trim().parse::<i64>())
        .wrap_error(Error::wrapped, format!("'{}' is not a number", text))
}
