//! This module contains all errors that can be returned by functions in this crate.

use thiserror::Error;

/// Result type returned by the parsing functions of this crate.
pub type Result<T> = ::std::result::Result<T, InvalidVersion>;

/// Contains all reasons a string can be rejected by
/// [`parse_components()`](crate::parse::parse_components) and
/// [`Version::parse()`](crate::version::Version::parse).
///
/// Every variant carries the input exactly as it was handed to the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVersion {
    /// No run of decimal digits was found anywhere in the input.
    #[error("Invalid version {0} must be numeric")]
    NonNumeric(String),
    /// A fourth dot-separated numeric segment follows `major.minor.patch`.
    #[error("Invalid version {0} cannot contain more than two dots")]
    TooManyComponents(String),
    /// A component is numeric but too large for a `u64`.
    #[error("Invalid version {0} has a component that does not fit in 64 bits")]
    ComponentOverflow(String),
}

impl InvalidVersion {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            InvalidVersion::NonNumeric(input)
            | InvalidVersion::TooManyComponents(input)
            | InvalidVersion::ComponentOverflow(input) => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        assert_eq!(
            InvalidVersion::NonNumeric(String::from("a.b.c")).to_string(),
            "Invalid version a.b.c must be numeric"
        );
        assert_eq!(
            InvalidVersion::TooManyComponents(String::from("4.5.6.7")).to_string(),
            "Invalid version 4.5.6.7 cannot contain more than two dots"
        );
    }

    #[test]
    fn empty_input_keeps_its_shape() {
        let err = InvalidVersion::NonNumeric(String::new());
        assert_eq!(err.input(), "");
        assert_eq!(err.to_string(), "Invalid version  must be numeric");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(InvalidVersion::ComponentOverflow(String::from("1.99999999999999999999")));
        assert!(err.to_string().contains("1.99999999999999999999"));
    }
}
