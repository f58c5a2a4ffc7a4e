//! The conversion surface: tagged outcomes and the converter facade.
//!
//! A conversion produces a [`Converted`] value, never a panic and never an
//! `Err`. Callers pick the failure policy per call site:
//!
//! - [`Converted::value_or`] substitutes a fallback, never fails
//! - [`Converted::value`] turns a failure into a [`RecastError`]
//! - [`Converted::ok`] drops the failure reason into an `Option`

use std::fmt;

use crate::error::{RecastError, RecastResult};
use crate::format::Format;
use crate::num::Int;
use crate::parse::parse_int;
use crate::render::render_int;

/// Why a source value could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No numeral at all: empty input, or only whitespace/sign.
    EmptyNumeral,
    /// The numeral starts with a character that is not a digit in the
    /// effective base.
    InvalidDigit,
    /// Non-whitespace characters remain after the numeral.
    TrailingGarbage,
    /// The numeral does not fit in the target type.
    Overflow,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FailureKind::EmptyNumeral => "no numeral found",
            FailureKind::InvalidDigit => "invalid digit",
            FailureKind::TrailingGarbage => "trailing characters after numeral",
            FailureKind::Overflow => "value out of range for target type",
        };
        write!(f, "{reason}")
    }
}

/// The outcome of a conversion: a value or an explicit failure.
///
/// There is no partial state; a failure carries only the reason it
/// failed, never a half-converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Converted<T> {
    /// The conversion produced a value.
    Success(T),
    /// The source could not be interpreted under the configuration.
    Failure(FailureKind),
}

impl<T> Converted<T> {
    /// Returns true if the conversion succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Converted::Success(_))
    }

    /// Returns true if the conversion failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the failure reason, if any.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Converted::Success(_) => None,
            Converted::Failure(kind) => Some(*kind),
        }
    }

    /// Unwraps the value, substituting `default` on failure.
    ///
    /// The non-throwing accessor: this can never fail.
    pub fn value_or(self, default: T) -> T {
        match self {
            Converted::Success(value) => value,
            Converted::Failure(_) => default,
        }
    }

    /// Unwraps the value, lazily computing a fallback on failure.
    pub fn value_or_else(self, default: impl FnOnce(FailureKind) -> T) -> T {
        match self {
            Converted::Success(value) => value,
            Converted::Failure(kind) => default(kind),
        }
    }

    /// Unwraps the value, erroring on failure.
    ///
    /// The throwing counterpart of [`Converted::value_or`].
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::ConversionFailed`] when the conversion
    /// failed.
    pub fn value(self) -> RecastResult<T> {
        match self {
            Converted::Success(value) => Ok(value),
            Converted::Failure(kind) => Err(RecastError::conversion_failed(kind)),
        }
    }

    /// Converts into an `Option`, discarding the failure reason.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Converted::Success(value) => Some(value),
            Converted::Failure(_) => None,
        }
    }

    /// Maps the success value, passing failures through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Converted<U> {
        match self {
            Converted::Success(value) => Converted::Success(f(value)),
            Converted::Failure(kind) => Converted::Failure(kind),
        }
    }
}

impl<T> From<Converted<T>> for Option<T> {
    fn from(converted: Converted<T>) -> Self {
        converted.ok()
    }
}

/// A converter: a [`Format`] plus the two conversion directions.
///
/// `Converter` is a cheap value. It holds no conversion state, so the
/// same instance can drive any number of sequential conversions and every
/// call sees exactly the configuration it was given.
///
/// # Example
///
/// ```rust
/// use recast_core::prelude::*;
///
/// let cnv = Converter::new()
///     .configure("base", "hex")
///     .unwrap()
///     .configure("skip_whitespace", "true")
///     .unwrap();
///
/// let ints: Vec<i32> = [" 5", "0XF", "not an int"]
///     .iter()
///     .map(|s| cnv.to_int(s).value_or(i32::MAX))
///     .collect();
/// assert_eq!(ints, vec![5, 15, i32::MAX]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    format: Format,
}

impl Converter {
    /// Creates a converter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter around an existing format.
    #[must_use]
    pub fn with_format(format: Format) -> Self {
        Self { format }
    }

    /// Returns the underlying format.
    #[must_use]
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Applies a named option, returning the updated converter.
    ///
    /// Chainable; repeated writes to the same option take the last value
    /// and leave the rest of the configuration intact.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::UnknownOption`] or
    /// [`RecastError::InvalidOptionValue`], as [`Format::set`] does.
    pub fn configure(mut self, name: &str, value: &str) -> RecastResult<Self> {
        self.format = self.format.set(name, value)?;
        Ok(self)
    }

    /// Converts text to an integer.
    pub fn to_int<T: Int>(&self, text: &str) -> Converted<T> {
        parse_int(text, &self.format)
    }

    /// Converts an integer to text.
    ///
    /// Rendering cannot fail for the supported types; the result is
    /// always `Success`, wrapped so both directions share one accessor
    /// surface.
    pub fn to_text<T: Int>(&self, value: T) -> Converted<String> {
        Converted::Success(render_int(value, &self.format))
    }
}
