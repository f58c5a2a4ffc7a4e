//! Formatting option enums.
//!
//! Each option the conversion surface recognizes by name:
//!
//! - [`Base`]: numeric radix for integer ↔ text
//! - [`Adjustment`]: alignment side used when padding to a minimum width
//! - [`Case`]: letter case for hexadecimal digits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecastError;

/// Numeric radix for integer ↔ text conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Base {
    /// Base 10
    #[default]
    Dec,
    /// Base 16
    Hex,
    /// Base 8
    Oct,
}

impl Base {
    /// Returns the radix as a number.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        match self {
            Base::Dec => 10,
            Base::Hex => 16,
            Base::Oct => 8,
        }
    }

    /// Returns the lowercase radix marker used when `show_base` is set.
    ///
    /// Decimal output carries no marker.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Base::Dec => "",
            Base::Hex => "0x",
            Base::Oct => "0",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base::Dec => "dec",
            Base::Hex => "hex",
            Base::Oct => "oct",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Base {
    type Err = RecastError;

    /// Parses a base from a string.
    ///
    /// Accepts short names ("hex"), full names ("hexadecimal"), and the
    /// radix itself ("16").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dec" | "decimal" | "10" => Ok(Base::Dec),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hex),
            "oct" | "octal" | "8" => Ok(Base::Oct),
            _ => Err(RecastError::invalid_option_value("base", s)),
        }
    }
}

/// Alignment side used when padding output to a minimum width.
///
/// `Right` adjustment places the value on the right, so the fill goes on
/// the left (the familiar numeric-column layout), and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Adjustment {
    /// Value on the left, fill on the right.
    Left,
    /// Value on the right, fill on the left.
    #[default]
    Right,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Adjustment::Left => "left",
            Adjustment::Right => "right",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Adjustment {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Adjustment::Left),
            "right" | "r" => Ok(Adjustment::Right),
            _ => Err(RecastError::invalid_option_value("adjustment", s)),
        }
    }
}

/// Letter case for the alphabetic digits of hexadecimal output.
///
/// Also governs the case of the `0x` radix marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Case {
    /// `ff`, `0xff`
    Lower,
    /// `FF`, `0XFF`
    #[default]
    Upper,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Case::Lower => "lower",
            Case::Upper => "upper",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Case {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(Case::Lower),
            "upper" | "uppercase" => Ok(Case::Upper),
            _ => Err(RecastError::invalid_option_value("case", s)),
        }
    }
}
