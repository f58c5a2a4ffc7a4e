//! # Recast Core
//!
//! Configurable integer ↔ text conversion with explicit success/failure
//! semantics.
//!
//! This crate provides:
//!
//! - **Formats**: an immutable [`Format`](format::Format) bundling radix,
//!   width, fill, alignment, digit case, radix marker, and whitespace
//!   options, built fluently or applied by option name
//! - **Conversions**: [`parse_int`](parse::parse_int) and
//!   [`render_int`](render::render_int) for any primitive integer type
//! - **Outcomes**: [`Converted`](convert::Converted), a tagged
//!   success/failure value with non-throwing (`value_or`) and throwing
//!   (`value`) accessors
//!
//! ## Design Philosophy
//!
//! - **Failure Is Data**: a value that does not convert is a `Failure`
//!   case, not an error; errors are reserved for misconfiguration and
//!   for the explicitly throwing accessor
//! - **Value Semantics**: formats and converters are `Copy`; applying
//!   an option produces a new value, and no conversion call carries
//!   state into the next
//! - **No Panics**: out-of-range input fails the conversion, it never
//!   aborts the caller
//!
//! ## Example
//!
//! ```rust
//! use recast_core::prelude::*;
//!
//! let cnv = Converter::new()
//!     .configure("base", "hex")
//!     .unwrap()
//!     .configure("show_base", "true")
//!     .unwrap();
//!
//! assert_eq!(cnv.to_text(15).value_or_else(|_| String::new()), "0XF");
//! assert_eq!(cnv.to_int::<i32>("0XF").value_or(-1), 15);
//! assert_eq!(cnv.to_int::<i32>("not an int").value_or(-1), -1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod convert;
pub mod error;
pub mod format;
pub mod num;
pub mod options;
pub mod parse;
pub mod render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::convert::{Converted, Converter, FailureKind};
    pub use crate::error::{RecastError, RecastResult};
    pub use crate::format::{Format, FormatBuilder};
    pub use crate::num::Int;
    pub use crate::options::{Adjustment, Base, Case};
    pub use crate::parse::parse_int;
    pub use crate::render::render_int;
}
