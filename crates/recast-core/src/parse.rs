//! Text → integer conversion.
//!
//! Parsing consumes the longest valid numeral prefix for the effective
//! base and then requires that nothing but whitespace remains. It never
//! panics; anything that cannot be interpreted comes back as a
//! [`Converted::Failure`] carrying the reason.

use crate::convert::{Converted, FailureKind};
use crate::format::Format;
use crate::num::Int;
use crate::options::Base;

/// Parses an integer from `input` under `format`.
///
/// Behavior, in order:
///
/// 1. Leading whitespace is skipped when `skip_whitespace` is set,
///    otherwise it fails the parse.
/// 2. A single `+`/`-` sign is accepted.
/// 3. The base comes from the format. When unconfigured, a `0x`/`0X`
///    prefix selects hexadecimal and everything else is decimal. An
///    explicitly hexadecimal format also tolerates the prefix; an
///    explicit base is never overridden by it.
/// 4. Digits are accumulated with checked arithmetic; a value outside
///    `T`'s range is a [`FailureKind::Overflow`] failure.
/// 5. Trailing whitespace is ignored; any other trailing character is a
///    [`FailureKind::TrailingGarbage`] failure.
///
/// # Example
///
/// ```rust
/// use recast_core::format::Format;
/// use recast_core::parse::parse_int;
///
/// let fmt = Format::new();
/// assert_eq!(parse_int::<i32>("-11", &fmt).value_or(-1), -11);
/// assert_eq!(parse_int::<i32>("not an int", &fmt).value_or(-1), -1);
/// ```
pub fn parse_int<T: Int>(input: &str, format: &Format) -> Converted<T> {
    let mut rest = input;
    if format.skip_whitespace() {
        rest = rest.trim_start();
    }

    let negative = match rest.as_bytes().first() {
        Some(&b'-') => {
            rest = &rest[1..];
            true
        }
        Some(&b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let base = effective_base(&mut rest, format.base());
    let radix = base.radix();

    let mut magnitude: u128 = 0;
    let mut digits = 0usize;
    let mut tail = "";
    for (pos, c) in rest.char_indices() {
        match c.to_digit(radix) {
            Some(d) => {
                magnitude = match magnitude
                    .checked_mul(u128::from(radix))
                    .and_then(|m| m.checked_add(u128::from(d)))
                {
                    Some(m) => m,
                    None => return fail(input, FailureKind::Overflow),
                };
                digits += 1;
            }
            None => {
                tail = &rest[pos..];
                break;
            }
        }
    }

    if digits == 0 {
        // Nothing numeric consumed: distinguish a missing numeral from a
        // numeral that starts with an invalid character.
        let kind = if rest.is_empty() || rest.chars().all(char::is_whitespace) {
            FailureKind::EmptyNumeral
        } else {
            FailureKind::InvalidDigit
        };
        return fail(input, kind);
    }

    if !tail.chars().all(char::is_whitespace) {
        return fail(input, FailureKind::TrailingGarbage);
    }

    match T::assemble(negative, magnitude) {
        Some(value) => Converted::Success(value),
        None => fail(input, FailureKind::Overflow),
    }
}

/// Resolves the base to parse with, consuming a `0x`/`0X` prefix from
/// `rest` where applicable.
///
/// The prefix is only consumed when a hexadecimal digit follows, so a
/// bare `"0x"` still parses as zero with trailing garbage.
fn effective_base(rest: &mut &str, configured: Option<Base>) -> Base {
    let prefixed = (rest.starts_with("0x") || rest.starts_with("0X"))
        && rest[2..].chars().next().is_some_and(|c| c.is_ascii_hexdigit());
    match configured {
        Some(Base::Hex) => {
            if prefixed {
                *rest = &rest[2..];
            }
            Base::Hex
        }
        Some(base) => base,
        None => {
            if prefixed {
                *rest = &rest[2..];
                Base::Hex
            } else {
                Base::Dec
            }
        }
    }
}

fn fail<T: Int>(input: &str, kind: FailureKind) -> Converted<T> {
    log::debug!("failed to parse {input:?}: {kind}");
    Converted::Failure(kind)
}
