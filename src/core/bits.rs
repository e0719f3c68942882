/*!
 * Power-of-Two Helpers
 * Bit tricks for every primitive integer, signed ones included
 */

/// Integers that can be tested for and rounded up to powers of two
pub trait PowerOfTwo: Copy {
    /// True when exactly one bit is set
    ///
    /// # Precondition
    /// `self >= 0` (debug-asserted for signed types)
    fn is_power_of_two(self) -> bool;

    /// Smallest power of two `>= self`, or `None` if it does not fit
    ///
    /// # Precondition
    /// `self >= 0` (debug-asserted for signed types)
    fn checked_next_power_of_two(self) -> Option<Self>;

    /// Zero of this type, returned when rounding up overflows
    const ZERO: Self;
}

/// Check whether `x` is a power of two
///
/// # Precondition
/// `x >= 0`
#[inline]
pub fn is_power_of_two<T: PowerOfTwo>(x: T) -> bool {
    x.is_power_of_two()
}

/// Round `x` up to the next power of two
///
/// Returns the smallest `p` with `is_power_of_two(p) && p >= x`.
/// `next_power_of_two(0)` is `1`. Values above the largest representable
/// power wrap to `0`, as the classic bit-smearing trick does.
///
/// # Precondition
/// `x >= 0`
#[inline]
pub fn next_power_of_two<T: PowerOfTwo>(x: T) -> T {
    x.checked_next_power_of_two().unwrap_or(T::ZERO)
}

/// Round `x` up to the next power of two, `None` on overflow
#[inline]
pub fn checked_next_power_of_two<T: PowerOfTwo>(x: T) -> Option<T> {
    x.checked_next_power_of_two()
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl PowerOfTwo for $t {
            const ZERO: Self = 0;

            #[inline]
            fn is_power_of_two(self) -> bool {
                <$t>::is_power_of_two(self)
            }

            #[inline]
            fn checked_next_power_of_two(self) -> Option<Self> {
                <$t>::checked_next_power_of_two(self)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($s:ty => $u:ty),*) => {$(
        impl PowerOfTwo for $s {
            const ZERO: Self = 0;

            #[inline]
            fn is_power_of_two(self) -> bool {
                debug_assert!(self >= 0, "is_power_of_two requires a non-negative value");
                self > 0 && (self as $u).is_power_of_two()
            }

            #[inline]
            fn checked_next_power_of_two(self) -> Option<Self> {
                debug_assert!(self >= 0, "next_power_of_two requires a non-negative value");
                (self.max(0) as $u)
                    .checked_next_power_of_two()
                    .and_then(|p| <$s>::try_from(p).ok())
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
