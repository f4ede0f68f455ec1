//! Error types for version parsing.
//!
//! Parsing a version string is the only fallible operation in this crate,
//! so the error hierarchy has a single kind: a format error carrying the
//! rejected input and a description of what was wrong with it.
//!
//! # Example
//!
//! ```
//! use nv_version::{Result, Version, VersionError};
//!
//! fn required_version(text: &str) -> Result<Version> {
//!     let version: Version = text.parse()?;
//!     Ok(version)
//! }
//!
//! match required_version("1.x") {
//!     Ok(v) => println!("Got version: {}", v),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::num::ParseIntError;
use thiserror::Error;

/// Error returned when a string cannot be parsed into a [`Version`].
///
/// [`Version`]: crate::Version
///
/// # Example
///
/// ```
/// use nv_version::VersionError;
///
/// let error = VersionError::format("1.2.3.4", "too many components");
/// assert!(error.is_format_error());
/// println!("{}", error); // "Invalid version string '1.2.3.4': too many components"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The text is not one to three dot-separated integers.
    #[error("Invalid version string '{input}': {reason}")]
    Format {
        /// The rejected input, as given
        input: String,
        /// Why it was rejected
        reason: String,
        /// Integer parse failure of the offending component, if any
        #[source]
        cause: Option<ParseIntError>,
    },
}

impl VersionError {
    /// Creates a Format error without a cause.
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
            cause: None,
        }
    }

    /// Creates a Format error caused by a failed integer parse.
    pub fn format_with_cause(
        input: impl Into<String>,
        reason: impl Into<String>,
        cause: ParseIntError,
    ) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
            cause: Some(cause),
        }
    }

    /// Returns true if this is a format error.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::Format { input, .. } => input,
        }
    }
}

/// Type alias for Results with VersionError.
pub type Result<T> = std::result::Result<T, VersionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        let error = VersionError::format("a.b", "major component is not an integer");
        let msg = format!("{}", error);

        assert!(msg.contains("a.b"));
        assert!(msg.contains("major component"));
    }

    #[test]
    fn test_format_without_cause_has_no_source() {
        use std::error::Error;

        let error = VersionError::format("", "empty version string");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let cause = "x".parse::<i32>().unwrap_err();
        let error = VersionError::format_with_cause("x", "major component is not an integer", cause);

        assert!(error.source().is_some());
        assert!(error.is_format_error());
    }

    #[test]
    fn test_input_accessor() {
        let error = VersionError::format("1.2.3.4", "too many components");
        assert_eq!(error.input(), "1.2.3.4");
    }

    #[test]
    fn test_result_with_question_mark() {
        fn inner() -> Result<()> {
            Err(VersionError::format("?", "test"))
        }

        fn outer() -> Result<String> {
            inner()?;
            Ok("success".into())
        }

        assert!(outer().is_err());
    }
}
