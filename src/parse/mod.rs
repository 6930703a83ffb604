//! Lexical checks for field paths and typed literals.
//!
//! Each entry point must consume its whole input; surrounding whitespace is
//! the caller's business.

mod error;
mod grammar;

pub use error::ParseError;

use winnow::Parser;

/// Split a dot-separated path into its identifier segments.
pub(crate) fn field_path(input: &str) -> Result<Vec<&str>, ParseError> {
    grammar::field_path
        .parse(input)
        .map_err(|e| ParseError::Syntax(e.to_string()))
}

/// Validate a decimal number, returning it unchanged.
pub(crate) fn number(input: &str) -> Result<&str, ParseError> {
    grammar::number
        .parse(input)
        .map_err(|e| ParseError::Syntax(e.to_string()))
}

/// Validate an ISO-8601 date with optional time of day.
pub(crate) fn date(input: &str) -> Result<&str, ParseError> {
    grammar::date
        .parse(input)
        .map_err(|e| ParseError::Syntax(e.to_string()))
}

/// Split `lo,hi` or `[lo,hi]` into trimmed bounds.
pub(crate) fn range(input: &str) -> Result<(&str, &str), ParseError> {
    grammar::range
        .parse(input)
        .map_err(|e| ParseError::Syntax(e.to_string()))
}

/// `true` or `false`, any letter case.
pub(crate) fn boolean(input: &str) -> Result<bool, ParseError> {
    if input.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::Syntax(format!("expected boolean, found '{input}'")))
    }
}
