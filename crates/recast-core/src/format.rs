//! Conversion configuration.
//!
//! A [`Format`] is an immutable bundle of formatting options with value
//! semantics: applying an option produces a new `Format`, later writes to
//! the same option override earlier ones, and all other options are
//! retained. Nothing about a conversion call mutates the `Format` it was
//! given, so one `Format` can drive any number of sequential conversions
//! with identical results.

use serde::{Deserialize, Serialize};

use crate::error::{RecastError, RecastResult};
use crate::options::{Adjustment, Base, Case};

/// An immutable set of conversion options.
///
/// # Example
///
/// ```rust
/// use recast_core::format::Format;
/// use recast_core::options::Base;
///
/// let fmt = Format::builder()
///     .base(Base::Hex)
///     .width(5)
///     .fill('*')
///     .build();
/// assert_eq!(fmt.width(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// Radix. `None` means unconfigured: parsing auto-detects a `0x`
    /// prefix, rendering falls back to decimal.
    base: Option<Base>,
    /// Minimum output width; shorter output is padded.
    width: usize,
    /// Padding character.
    fill: char,
    /// Side the value sits on when padded.
    adjustment: Adjustment,
    /// Letter case for hexadecimal digits.
    case: Case,
    /// Prefix output with a radix marker (`0x` for hex, `0` for octal).
    show_base: bool,
    /// Ignore leading whitespace when parsing.
    skip_whitespace: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            base: None,
            width: 0,
            fill: ' ',
            adjustment: Adjustment::Right,
            case: Case::Upper,
            show_base: false,
            skip_whitespace: false,
        }
    }
}

impl Format {
    /// Creates a format with all options at their defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for fluent construction.
    #[must_use]
    pub fn builder() -> FormatBuilder {
        FormatBuilder::new()
    }

    /// Returns the configured base, if any.
    #[must_use]
    pub fn base(&self) -> Option<Base> {
        self.base
    }

    /// Returns the minimum output width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the padding character.
    #[must_use]
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Returns the alignment side.
    #[must_use]
    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Returns the hexadecimal digit case.
    #[must_use]
    pub fn case(&self) -> Case {
        self.case
    }

    /// Returns true if output carries a radix marker.
    #[must_use]
    pub fn show_base(&self) -> bool {
        self.show_base
    }

    /// Returns true if parsing ignores leading whitespace.
    #[must_use]
    pub fn skip_whitespace(&self) -> bool {
        self.skip_whitespace
    }

    /// Applies a named option, returning the updated format.
    ///
    /// This is the string-keyed configuration surface: repeated writes to
    /// the same option take the last value, every other option is kept.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::UnknownOption`] for an unrecognized name and
    /// [`RecastError::InvalidOptionValue`] for a recognized option whose
    /// value does not parse.
    pub fn set(mut self, name: &str, value: &str) -> RecastResult<Self> {
        log::trace!("applying option {name}={value}");
        match name.trim().to_lowercase().as_str() {
            "base" => self.base = Some(value.parse()?),
            "width" => {
                self.width = value
                    .trim()
                    .parse()
                    .map_err(|_| RecastError::invalid_option_value("width", value))?;
            }
            "fill" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.fill = c,
                    _ => return Err(RecastError::invalid_option_value("fill", value)),
                }
            }
            "adjustment" => self.adjustment = value.parse()?,
            "case" => self.case = value.parse()?,
            "show_base" | "showbase" => {
                self.show_base = parse_bool(value)
                    .ok_or_else(|| RecastError::invalid_option_value("show_base", value))?;
            }
            "skip_whitespace" | "skipws" => {
                self.skip_whitespace = parse_bool(value)
                    .ok_or_else(|| RecastError::invalid_option_value("skip_whitespace", value))?;
            }
            _ => return Err(RecastError::unknown_option(name)),
        }
        Ok(self)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Builder for [`Format`].
///
/// All options have defaults, so `build` cannot fail.
#[derive(Debug, Clone, Default)]
pub struct FormatBuilder {
    format: Format,
}

impl FormatBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the radix.
    #[must_use]
    pub fn base(mut self, base: Base) -> Self {
        self.format.base = Some(base);
        self
    }

    /// Sets the minimum output width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.format.width = width;
        self
    }

    /// Sets the padding character.
    #[must_use]
    pub fn fill(mut self, fill: char) -> Self {
        self.format.fill = fill;
        self
    }

    /// Sets the alignment side.
    #[must_use]
    pub fn adjustment(mut self, adjustment: Adjustment) -> Self {
        self.format.adjustment = adjustment;
        self
    }

    /// Sets the hexadecimal digit case.
    #[must_use]
    pub fn case(mut self, case: Case) -> Self {
        self.format.case = case;
        self
    }

    /// Enables or disables the radix marker on output.
    #[must_use]
    pub fn show_base(mut self, show: bool) -> Self {
        self.format.show_base = show;
        self
    }

    /// Enables or disables skipping leading whitespace on parse.
    #[must_use]
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.format.skip_whitespace = skip;
        self
    }

    /// Finalizes the format.
    #[must_use]
    pub fn build(self) -> Format {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let fmt = Format::new();
        assert_eq!(fmt.base(), None);
        assert_eq!(fmt.width(), 0);
        assert_eq!(fmt.fill(), ' ');
        assert_eq!(fmt.adjustment(), Adjustment::Right);
        assert_eq!(fmt.case(), Case::Upper);
        assert!(!fmt.show_base());
        assert!(!fmt.skip_whitespace());
    }

    #[test]
    fn test_builder() {
        let fmt = Format::builder()
            .base(Base::Hex)
            .width(5)
            .fill('*')
            .adjustment(Adjustment::Left)
            .case(Case::Lower)
            .show_base(true)
            .skip_whitespace(true)
            .build();

        assert_eq!(fmt.base(), Some(Base::Hex));
        assert_eq!(fmt.width(), 5);
        assert_eq!(fmt.fill(), '*');
        assert_eq!(fmt.adjustment(), Adjustment::Left);
        assert_eq!(fmt.case(), Case::Lower);
        assert!(fmt.show_base());
        assert!(fmt.skip_whitespace());
    }

    #[test]
    fn test_set_by_name() {
        let fmt = Format::new()
            .set("base", "hex")
            .unwrap()
            .set("width", "4")
            .unwrap()
            .set("fill", "0")
            .unwrap()
            .set("show_base", "true")
            .unwrap();

        assert_eq!(fmt.base(), Some(Base::Hex));
        assert_eq!(fmt.width(), 4);
        assert_eq!(fmt.fill(), '0');
        assert!(fmt.show_base());
    }

    #[test]
    fn test_set_last_write_wins() {
        let fmt = Format::new()
            .set("base", "hex")
            .unwrap()
            .set("width", "8")
            .unwrap()
            .set("base", "oct")
            .unwrap();

        // The later base overwrites, the width is retained.
        assert_eq!(fmt.base(), Some(Base::Oct));
        assert_eq!(fmt.width(), 8);
    }

    #[test]
    fn test_set_unknown_option() {
        let err = Format::new().set("precision", "2").unwrap_err();
        assert_eq!(err, RecastError::unknown_option("precision"));
    }

    #[test]
    fn test_set_invalid_values() {
        assert!(matches!(
            Format::new().set("base", "binary").unwrap_err(),
            RecastError::InvalidOptionValue { .. }
        ));
        assert!(matches!(
            Format::new().set("width", "wide").unwrap_err(),
            RecastError::InvalidOptionValue { .. }
        ));
        assert!(matches!(
            Format::new().set("fill", "ab").unwrap_err(),
            RecastError::InvalidOptionValue { .. }
        ));
        assert!(matches!(
            Format::new().set("show_base", "maybe").unwrap_err(),
            RecastError::InvalidOptionValue { .. }
        ));
    }

    #[test]
    fn test_set_does_not_mutate_original() {
        let original = Format::new();
        let updated = original.set("width", "9").unwrap();
        assert_eq!(original.width(), 0);
        assert_eq!(updated.width(), 9);
    }

    #[test]
    fn test_serde() {
        let fmt = Format::builder().base(Base::Oct).width(3).build();
        let json = serde_json::to_string(&fmt).unwrap();
        let parsed: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(fmt, parsed);
    }
}
