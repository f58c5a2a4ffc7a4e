//! Integer → text conversion.
//!
//! Every call builds a fresh `String`; there is no shared stream or
//! buffer, so repeated renders under one [`Format`] cannot contaminate
//! each other.

use crate::format::Format;
use crate::num::Int;
use crate::options::{Adjustment, Base, Case};

/// Renders an integer as text under `format`.
///
/// Digits are produced in the configured base (decimal when
/// unconfigured), the hexadecimal alphabet follows `case`, and with
/// `show_base` a radix marker (`0x`/`0X` for hex, `0` for octal) sits
/// between the sign and the digits. Output shorter than `width` is padded
/// with `fill` on the side opposite the `adjustment`.
///
/// # Example
///
/// ```rust
/// use recast_core::format::Format;
/// use recast_core::options::{Base, Case};
/// use recast_core::render::render_int;
///
/// let fmt = Format::builder()
///     .base(Base::Hex)
///     .case(Case::Upper)
///     .show_base(true)
///     .build();
/// assert_eq!(render_int(15, &fmt), "0XF");
/// ```
#[must_use]
pub fn render_int<T: Int>(value: T, format: &Format) -> String {
    let (negative, magnitude) = value.split();
    let base = format.base().unwrap_or(Base::Dec);

    let mut body = String::new();
    if negative {
        body.push('-');
    }
    if format.show_base() {
        match format.case() {
            Case::Upper => body.push_str(&base.marker().to_uppercase()),
            Case::Lower => body.push_str(base.marker()),
        }
    }
    body.push_str(&digits(magnitude, base, format.case()));

    pad(body, format)
}

/// Renders the magnitude's digits, most significant first.
fn digits(mut magnitude: u128, base: Base, case: Case) -> String {
    let radix = u128::from(base.radix());
    let mut out = Vec::new();
    loop {
        let digit = (magnitude % radix) as u32;
        let c = match std::char::from_digit(digit, base.radix()) {
            Some(c) => c,
            // Unreachable: digit < radix <= 16.
            None => '0',
        };
        out.push(match case {
            Case::Upper => c.to_ascii_uppercase(),
            Case::Lower => c,
        });
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    out.iter().rev().collect()
}

fn pad(body: String, format: &Format) -> String {
    let len = body.chars().count();
    if len >= format.width() {
        return body;
    }
    let filler: String = std::iter::repeat(format.fill())
        .take(format.width() - len)
        .collect();
    match format.adjustment() {
        Adjustment::Right => filler + &body,
        Adjustment::Left => body + &filler,
    }
}
