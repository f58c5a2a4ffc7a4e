//! Integer support for the conversion engine.
//!
//! [`Int`] decomposes a machine integer into sign and `u128` magnitude and
//! reassembles one with range checking, so parsing and rendering are
//! written once against the widest magnitude and never overflow silently.
//! The trait is sealed; it is implemented for every primitive integer
//! type.

mod private {
    pub trait Sealed {}
}

/// A primitive integer usable as a conversion target/source.
pub trait Int: private::Sealed + Copy + Eq + std::fmt::Debug {
    /// Splits into `(is_negative, magnitude)`.
    fn split(self) -> (bool, u128);

    /// Reassembles from sign and magnitude.
    ///
    /// Returns `None` when the value does not fit: magnitude outside the
    /// type's range, or a non-zero negative magnitude for an unsigned
    /// type.
    fn assemble(negative: bool, magnitude: u128) -> Option<Self>;
}

macro_rules! int_impl_signed {
    ($($t:ty => $ut:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Int for $t {
            #[inline]
            fn split(self) -> (bool, u128) {
                (self < 0, self.unsigned_abs() as u128)
            }

            #[inline]
            fn assemble(negative: bool, magnitude: u128) -> Option<Self> {
                if negative {
                    if magnitude > <$t>::MIN.unsigned_abs() as u128 {
                        return None;
                    }
                    Some((magnitude as $ut).wrapping_neg() as $t)
                } else {
                    if magnitude > <$t>::MAX as u128 {
                        return None;
                    }
                    Some(magnitude as $t)
                }
            }
        }
    )*};
}

macro_rules! int_impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Int for $t {
            #[inline]
            fn split(self) -> (bool, u128) {
                (false, self as u128)
            }

            #[inline]
            fn assemble(negative: bool, magnitude: u128) -> Option<Self> {
                if negative && magnitude != 0 {
                    return None;
                }
                if magnitude > <$t>::MAX as u128 {
                    return None;
                }
                Some(magnitude as $t)
            }
        }
    )*};
}

int_impl_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

int_impl_unsigned!(u8, u16, u32, u64, u128, usize);
