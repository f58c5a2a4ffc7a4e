//! Error types for the Recast library.
//!
//! Configuration mistakes (unknown option names, malformed option values)
//! are errors; a value that merely fails to convert is not. Failed
//! conversions are data (see [`Converted`](crate::convert::Converted)) and
//! only become a [`RecastError`] when the caller opts into the throwing
//! accessor [`Converted::value`](crate::convert::Converted::value).

use thiserror::Error;

use crate::convert::FailureKind;

/// A specialized Result type for Recast operations.
pub type RecastResult<T> = Result<T, RecastError>;

/// The main error type for Recast operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecastError {
    /// An option name not recognized by the configuration surface.
    #[error("Unknown option: '{name}'")]
    UnknownOption {
        /// The unrecognized option name.
        name: String,
    },

    /// A recognized option given a value it cannot accept.
    #[error("Invalid value for option '{option}': '{value}'")]
    InvalidOptionValue {
        /// The option that rejected the value.
        option: String,
        /// The offending value as supplied.
        value: String,
    },

    /// A conversion failure, surfaced through the throwing accessor.
    #[error("Conversion failed: {kind}")]
    ConversionFailed {
        /// What went wrong with the source value.
        kind: FailureKind,
    },
}

impl RecastError {
    /// Creates an unknown-option error.
    #[must_use]
    pub fn unknown_option(name: impl Into<String>) -> Self {
        Self::UnknownOption { name: name.into() }
    }

    /// Creates an invalid-option-value error.
    #[must_use]
    pub fn invalid_option_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOptionValue {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Creates a conversion-failed error.
    #[must_use]
    pub fn conversion_failed(kind: FailureKind) -> Self {
        Self::ConversionFailed { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecastError::unknown_option("precision");
        assert_eq!(err.to_string(), "Unknown option: 'precision'");

        let err = RecastError::invalid_option_value("base", "binary");
        assert!(err.to_string().contains("'base'"));
        assert!(err.to_string().contains("'binary'"));
    }

    #[test]
    fn test_conversion_failed_display() {
        let err = RecastError::conversion_failed(FailureKind::Overflow);
        assert!(err.to_string().contains("Conversion failed"));
    }
}
