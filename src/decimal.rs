use crate::constants::MAX_DIGITS;
use crate::error::Error;
use crate::ops;

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "bytemuck")]
use bytemuck_derive::{Pod, Zeroable};
use num_traits::{FromPrimitive, ToPrimitive};

/// `Decimal128` is the unscaled value of a `DECIMAL(precision, scale)` number: a signed 128 bit
/// two's-complement integer stored as a signed high word and an unsigned low word, i.e.
/// `(high << 64) | low`.
///
/// The value carries no scale or precision. Those belong to the column type and are supplied
/// by the caller wherever they matter, e.g. [`Decimal128::to_string_with_scale`] and
/// [`Decimal128::rescale`]. Every bit pattern is a legal value in `[-2^127, 2^127 - 1]`.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "c-repr", repr(C))]
#[cfg_attr(feature = "align16", repr(align(16)))]
#[cfg_attr(feature = "bytemuck", derive(Pod, Zeroable))]
pub struct Decimal128 {
    // The low word comes first so that `repr(C)` matches the little-endian wire layout.
    lo: u64,
    hi: i64,
}

impl Decimal128 {
    /// The smallest value that can be represented: `-2^127`.
    pub const MIN: Decimal128 = Decimal128::from_parts(i64::MIN, 0);
    /// The largest value that can be represented: `2^127 - 1`.
    pub const MAX: Decimal128 = Decimal128::from_parts(i64::MAX, u64::MAX);
    pub const ZERO: Decimal128 = Decimal128::from_parts(0, 0);
    pub const ONE: Decimal128 = Decimal128::from_parts(0, 1);
    pub const NEGATIVE_ONE: Decimal128 = Decimal128::from_parts(-1, u64::MAX);
    /// The number of decimal digits that always fit, irrespective of value.
    pub const MAX_DIGITS: u32 = MAX_DIGITS;

    /// Returns a `Decimal128` composed from its high and low words.
    ///
    /// # Example
    ///
    /// ```
    /// # use decimal128::Decimal128;
    /// let two_to_64 = Decimal128::from_parts(1, 0);
    /// assert_eq!(two_to_64.to_string(), "18446744073709551616");
    /// assert_eq!(Decimal128::from_parts(-1, u64::MAX), Decimal128::NEGATIVE_ONE);
    /// ```
    #[must_use]
    pub const fn from_parts(high: i64, low: u64) -> Decimal128 {
        Decimal128 { lo: low, hi: high }
    }

    /// The signed upper 64 bits.
    #[inline(always)]
    #[must_use]
    pub const fn high_bits(&self) -> i64 {
        self.hi
    }

    /// The unsigned lower 64 bits.
    #[inline(always)]
    #[must_use]
    pub const fn low_bits(&self) -> u64 {
        self.lo
    }

    /// Returns `true` if the sign bit of the high word is set.
    #[inline(always)]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.hi < 0
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// Two's-complement negation. `MIN` negates to itself.
    #[must_use]
    pub const fn wrapping_neg(self) -> Decimal128 {
        let lo = (!self.lo).wrapping_add(1);
        let mut hi = !self.hi;
        if lo == 0 {
            hi = hi.wrapping_add(1);
        }
        Decimal128 { lo, hi }
    }

    /// Negates the value in place. `MIN` negates to itself.
    pub fn negate(&mut self) -> &mut Self {
        *self = self.wrapping_neg();
        self
    }

    /// The absolute value. `MIN` has no positive counterpart and is returned unchanged.
    #[must_use]
    pub const fn abs(&self) -> Decimal128 {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            *self
        }
    }

    /// Replaces the value with its absolute value.
    pub fn set_abs(&mut self) -> &mut Self {
        *self = self.abs();
        self
    }

    /// The magnitude as `(high, low)` unsigned words. Unlike [`Decimal128::abs`] this is exact
    /// for `MIN`.
    pub(crate) const fn unsigned_abs(&self) -> (u64, u64) {
        if self.is_negative() {
            let lo = (!self.lo).wrapping_add(1);
            let mut hi = !self.hi as u64;
            if lo == 0 {
                hi = hi.wrapping_add(1);
            }
            (hi, lo)
        } else {
            (self.hi as u64, self.lo)
        }
    }

    /// Returns the memory representation as 16 little-endian bytes: the low word in bytes
    /// 0-7 followed by the high word in bytes 8-15.
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 16] {
        let lo = self.lo.to_le_bytes();
        let hi = self.hi.to_le_bytes();
        [
            lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7], hi[0], hi[1], hi[2], hi[3], hi[4], hi[5],
            hi[6], hi[7],
        ]
    }

    /// Reads a value from the layout produced by [`Decimal128::to_le_bytes`].
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Decimal128 {
        let lo = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let hi = i64::from_le_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Decimal128 { lo, hi }
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The quotient is truncated toward zero and the remainder takes the sign of the dividend,
    /// so `quotient * divisor + remainder == self`. `MIN / -1` wraps to `MIN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use decimal128::Decimal128;
    /// let (q, r) = Decimal128::from(17).divide(&Decimal128::from(-5)).unwrap();
    /// assert_eq!(q, Decimal128::from(-3));
    /// assert_eq!(r, Decimal128::from(2));
    /// ```
    pub fn divide(&self, divisor: &Decimal128) -> Result<(Decimal128, Decimal128), Error> {
        ops::div_impl(self, divisor)
    }

    /// Changes the scale of the value from `original_scale` to `new_scale` by multiplying or
    /// dividing by the matching power of ten.
    ///
    /// # Errors
    ///
    /// * [`Error::ScaleDeltaOutOfRange`] unless the scales differ by 1 to 38 digits.
    /// * [`Error::RescaleDataLoss`] if scaling down leaves a non-zero remainder, or scaling up
    ///   overflows 128 bits.
    ///
    /// # Example
    ///
    /// ```
    /// # use decimal128::Decimal128;
    /// let value = Decimal128::from(12345);
    /// assert_eq!(value.rescale(2, 4).unwrap(), Decimal128::from(1234500));
    /// assert!(value.rescale(2, 1).is_err());
    /// ```
    pub fn rescale(&self, original_scale: i32, new_scale: i32) -> Result<Decimal128, Error> {
        ops::rescale_impl(self, original_scale, new_scale)
    }

    /// Checked addition. Returns `None` if the sum does not fit in 128 bits.
    #[must_use]
    pub const fn checked_add(self, other: Decimal128) -> Option<Decimal128> {
        let sum = ops::add_impl(&self, &other);
        if self.is_negative() == other.is_negative() && sum.is_negative() != self.is_negative() {
            None
        } else {
            Some(sum)
        }
    }

    /// Checked subtraction. Returns `None` if the difference does not fit in 128 bits.
    #[must_use]
    pub const fn checked_sub(self, other: Decimal128) -> Option<Decimal128> {
        let diff = ops::sub_impl(&self, &other);
        if self.is_negative() != other.is_negative() && diff.is_negative() != self.is_negative() {
            None
        } else {
            Some(diff)
        }
    }

    /// Checked multiplication. Returns `None` if the product does not fit in 128 bits.
    #[must_use]
    pub fn checked_mul(self, other: Decimal128) -> Option<Decimal128> {
        ops::checked_mul_impl(&self, &other)
    }

    /// Checked division. Returns `None` if `other` is zero or the quotient overflows
    /// (`MIN / -1`).
    #[must_use]
    pub fn checked_div(self, other: Decimal128) -> Option<Decimal128> {
        if self == Self::MIN && other == Self::NEGATIVE_ONE {
            return None;
        }
        self.divide(&other).ok().map(|(quotient, _)| quotient)
    }

    /// Checked remainder. Returns `None` if `other` is zero or the division overflows.
    #[must_use]
    pub fn checked_rem(self, other: Decimal128) -> Option<Decimal128> {
        if self == Self::MIN && other == Self::NEGATIVE_ONE {
            return None;
        }
        self.divide(&other).ok().map(|(_, remainder)| remainder)
    }

    /// Checked negation. Returns `None` for `MIN`.
    #[must_use]
    pub const fn checked_neg(self) -> Option<Decimal128> {
        if self.hi == i64::MIN && self.lo == 0 {
            None
        } else {
            Some(self.wrapping_neg())
        }
    }

    #[must_use]
    pub const fn wrapping_add(self, other: Decimal128) -> Decimal128 {
        ops::add_impl(&self, &other)
    }

    #[must_use]
    pub const fn wrapping_sub(self, other: Decimal128) -> Decimal128 {
        ops::sub_impl(&self, &other)
    }

    /// Multiplication truncated to the low 128 bits of the product. Overflow is not reported.
    #[must_use]
    pub const fn wrapping_mul(self, other: Decimal128) -> Decimal128 {
        ops::mul_impl(&self, &other)
    }

    /// Returns `-1`, `0` or `1` depending on the sign of the value.
    #[must_use]
    pub const fn signum(&self) -> Decimal128 {
        if self.is_negative() {
            Self::NEGATIVE_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Returns the value as an `i64` if it fits.
    #[must_use]
    pub const fn to_i64(&self) -> Option<i64> {
        let lo = self.lo as i64;
        // The high word must be pure sign extension of the low word.
        if (self.hi == 0 && lo >= 0) || (self.hi == -1 && lo < 0) {
            Some(lo)
        } else {
            None
        }
    }
}

impl PartialOrd for Decimal128 {
    #[inline]
    fn partial_cmp(&self, other: &Decimal128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal128 {
    fn cmp(&self, other: &Decimal128) -> Ordering {
        ops::cmp_impl(self, other)
    }
}

impl fmt::Display for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rep = crate::str::to_integer_str_internal(self);
        let digits = rep.strip_prefix('-').unwrap_or(rep.as_str());
        f.pad_integral(!self.is_negative(), "", digits)
    }
}

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Decimal128 {
    type Err = Error;

    /// Parses a decimal literal and returns its unscaled value, discarding the scale. Use
    /// [`crate::DecimalLiteral`] to keep the precision and scale.
    fn from_str(value: &str) -> Result<Decimal128, Self::Err> {
        crate::str::parse_str_radix_10(value).map(|literal| literal.value)
    }
}

macro_rules! impl_from {
    ($T:ty) => {
        impl From<$T> for Decimal128 {
            #[inline]
            fn from(t: $T) -> Self {
                Decimal128::from(t as i128)
            }
        }
    };
}

impl_from!(i8);
impl_from!(i16);
impl_from!(i32);
impl_from!(i64);
impl_from!(isize);
impl_from!(u8);
impl_from!(u16);
impl_from!(u32);
impl_from!(u64);
impl_from!(usize);

impl From<i128> for Decimal128 {
    #[inline]
    fn from(value: i128) -> Self {
        Decimal128 {
            lo: value as u64,
            hi: (value >> 64) as i64,
        }
    }
}

impl From<Decimal128> for i128 {
    #[inline]
    fn from(value: Decimal128) -> Self {
        ((value.hi as i128) << 64) | value.lo as i128
    }
}

impl FromPrimitive for Decimal128 {
    fn from_i64(n: i64) -> Option<Decimal128> {
        Some(Decimal128::from(n))
    }

    fn from_u64(n: u64) -> Option<Decimal128> {
        Some(Decimal128::from(n))
    }

    fn from_i128(n: i128) -> Option<Decimal128> {
        Some(Decimal128::from(n))
    }

    fn from_u128(n: u128) -> Option<Decimal128> {
        i128::try_from(n).ok().map(Decimal128::from)
    }
}

impl ToPrimitive for Decimal128 {
    fn to_i64(&self) -> Option<i64> {
        Decimal128::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }

    fn to_i128(&self) -> Option<i128> {
        Some(i128::from(*self))
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            None
        } else {
            Some(i128::from(*self) as u128)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negate_is_self_inverse() {
        for value in [0i128, 1, -1, 42, -42, 1 << 64, -(1 << 64), i128::MAX, i128::MIN + 1] {
            let d = Decimal128::from(value);
            assert_eq!(i128::from(d.wrapping_neg()), value.wrapping_neg());
            assert_eq!(d.wrapping_neg().wrapping_neg(), d);
        }
    }

    #[test]
    fn negate_min_is_min() {
        let mut min = Decimal128::MIN;
        min.negate();
        assert_eq!(min, Decimal128::MIN);
        assert_eq!(Decimal128::MIN.abs(), Decimal128::MIN);
        assert_eq!(Decimal128::MIN.checked_neg(), None);
    }

    #[test]
    fn negate_carries_into_high_word() {
        // Negating 2^64 inverts the low word to all ones, which wraps to zero on increment.
        let value = Decimal128::from_parts(1, 0);
        let negated = value.wrapping_neg();
        assert_eq!(negated.high_bits(), -1);
        assert_eq!(negated.low_bits(), 0);
    }

    #[test]
    fn abs_leaves_non_negative_values_alone() {
        assert_eq!(Decimal128::from(7).abs(), Decimal128::from(7));
        assert_eq!(Decimal128::from(-7).abs(), Decimal128::from(7));
        assert_eq!(Decimal128::ZERO.abs(), Decimal128::ZERO);
        let mut value = Decimal128::from(-12);
        value.set_abs();
        assert_eq!(value, Decimal128::from(12));
    }

    #[test]
    fn unsigned_abs_is_exact_for_min() {
        assert_eq!(Decimal128::MIN.unsigned_abs(), (1 << 63, 0));
        assert_eq!(Decimal128::NEGATIVE_ONE.unsigned_abs(), (0, 1));
        assert_eq!(Decimal128::from_parts(-1, 0).unsigned_abs(), (1, 0));
    }

    #[test]
    fn it_can_round_trip_bytes() {
        let value = Decimal128::from_parts(0x0102_0304_0506_0708, 0x090a_0b0c_0d0e_0f10);
        let bytes = value.to_le_bytes();
        assert_eq!(bytes[0], 0x10);
        assert_eq!(bytes[7], 0x09);
        assert_eq!(bytes[8], 0x08);
        assert_eq!(bytes[15], 0x01);
        assert_eq!(Decimal128::from_le_bytes(bytes), value);
        assert_eq!(Decimal128::NEGATIVE_ONE.to_le_bytes(), [0xff; 16]);
    }

    #[test]
    fn to_i64_requires_sign_extension() {
        assert_eq!(Decimal128::from(-5).to_i64(), Some(-5));
        assert_eq!(Decimal128::from(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(Decimal128::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(Decimal128::from(u64::MAX).to_i64(), None);
        assert_eq!(Decimal128::from(i64::MIN as i128 - 1).to_i64(), None);
        assert_eq!(ToPrimitive::to_u64(&Decimal128::from(u64::MAX)), Some(u64::MAX));
        assert_eq!(ToPrimitive::to_u128(&Decimal128::from(-1)), None);
    }

    #[test]
    fn checked_ops_detect_overflow() {
        assert_eq!(Decimal128::MAX.checked_add(Decimal128::ONE), None);
        assert_eq!(Decimal128::MIN.checked_sub(Decimal128::ONE), None);
        assert_eq!(Decimal128::MAX.checked_sub(Decimal128::ONE), Some(Decimal128::from(i128::MAX - 1)));
        assert_eq!(Decimal128::MIN.checked_div(Decimal128::NEGATIVE_ONE), None);
        assert_eq!(Decimal128::ONE.checked_div(Decimal128::ZERO), None);
        assert_eq!(Decimal128::ONE.checked_rem(Decimal128::ZERO), None);
        assert_eq!(Decimal128::from(7).checked_rem(Decimal128::from(4)), Some(Decimal128::from(3)));
    }

    #[test]
    fn signum_follows_sign() {
        assert_eq!(Decimal128::from(-9).signum(), Decimal128::NEGATIVE_ONE);
        assert_eq!(Decimal128::ZERO.signum(), Decimal128::ZERO);
        assert_eq!(Decimal128::from_parts(3, 0).signum(), Decimal128::ONE);
    }
}
