use crate::{ops, Decimal128, Error};

use core::{
    iter::{Product, Sum},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul,
        MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, Num, One, Signed, WrappingAdd,
    WrappingMul, WrappingNeg, WrappingSub, Zero,
};

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: $res) -> $res {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: $res) -> $res {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: &$res) -> $res {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
    };
}

macro_rules! impl_ref_binop {
    (impl $imp:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<'a, 'b> $imp<&'b Decimal128> for &'a Decimal128 {
            type Output = Decimal128;

            #[inline(always)]
            fn $method(self, other: &Decimal128) -> Decimal128 {
                let ($lhs, $rhs) = (self, other);
                $body
            }
        }
        forward_all_binop!(impl $imp for Decimal128, $method);
    };
}

macro_rules! impl_assign {
    (impl $imp:ident, $method:ident, $op:ident) => {
        impl $imp<Decimal128> for Decimal128 {
            #[inline(always)]
            fn $method(&mut self, other: Decimal128) {
                *self = (&*self).$op(&other);
            }
        }

        impl<'a> $imp<&'a Decimal128> for Decimal128 {
            #[inline(always)]
            fn $method(&mut self, other: &'a Decimal128) {
                *self = (&*self).$op(other);
            }
        }
    };
}

// Operators are the unchecked layer: dividing by zero is a caller bug, not a recoverable error.
fn divide_or_panic(dividend: &Decimal128, divisor: &Decimal128) -> (Decimal128, Decimal128) {
    match ops::div_impl(dividend, divisor) {
        Ok(result) => result,
        Err(_) => panic!("Division by zero"),
    }
}

impl_ref_binop!(impl Add, add, |d1, d2| ops::add_impl(d1, d2));
impl_ref_binop!(impl Sub, sub, |d1, d2| ops::sub_impl(d1, d2));
impl_ref_binop!(impl Mul, mul, |d1, d2| ops::mul_impl(d1, d2));
impl_ref_binop!(impl Div, div, |d1, d2| divide_or_panic(d1, d2).0);
impl_ref_binop!(impl Rem, rem, |d1, d2| divide_or_panic(d1, d2).1);
impl_ref_binop!(impl BitAnd, bitand, |d1, d2| Decimal128::from_parts(
    d1.high_bits() & d2.high_bits(),
    d1.low_bits() & d2.low_bits()
));
impl_ref_binop!(impl BitOr, bitor, |d1, d2| Decimal128::from_parts(
    d1.high_bits() | d2.high_bits(),
    d1.low_bits() | d2.low_bits()
));
impl_ref_binop!(impl BitXor, bitxor, |d1, d2| Decimal128::from_parts(
    d1.high_bits() ^ d2.high_bits(),
    d1.low_bits() ^ d2.low_bits()
));

impl_assign!(impl AddAssign, add_assign, add);
impl_assign!(impl SubAssign, sub_assign, sub);
impl_assign!(impl MulAssign, mul_assign, mul);
impl_assign!(impl DivAssign, div_assign, div);
impl_assign!(impl RemAssign, rem_assign, rem);
impl_assign!(impl BitAndAssign, bitand_assign, bitand);
impl_assign!(impl BitOrAssign, bitor_assign, bitor);
impl_assign!(impl BitXorAssign, bitxor_assign, bitxor);

impl Neg for Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn neg(self) -> Decimal128 {
        self.wrapping_neg()
    }
}

impl<'a> Neg for &'a Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn neg(self) -> Decimal128 {
        self.wrapping_neg()
    }
}

impl Not for Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn not(self) -> Decimal128 {
        Decimal128::from_parts(!self.high_bits(), !self.low_bits())
    }
}

impl<'a> Not for &'a Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn not(self) -> Decimal128 {
        !*self
    }
}

/// Shifts of 128 bits or more clear the value.
impl Shl<u32> for Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn shl(self, bits: u32) -> Decimal128 {
        ops::shl_impl(&self, bits)
    }
}

/// Arithmetic shift. Shifts of 128 bits or more leave only the sign: `0` or `-1`.
impl Shr<u32> for Decimal128 {
    type Output = Decimal128;

    #[inline]
    fn shr(self, bits: u32) -> Decimal128 {
        ops::shr_impl(&self, bits)
    }
}

impl ShlAssign<u32> for Decimal128 {
    #[inline]
    fn shl_assign(&mut self, bits: u32) {
        *self = ops::shl_impl(self, bits);
    }
}

impl ShrAssign<u32> for Decimal128 {
    #[inline]
    fn shr_assign(&mut self, bits: u32) {
        *self = ops::shr_impl(self, bits);
    }
}

impl Sum for Decimal128 {
    fn sum<I: Iterator<Item = Decimal128>>(iter: I) -> Self {
        iter.fold(Decimal128::ZERO, |sum, value| sum + value)
    }
}

impl<'a> Sum<&'a Decimal128> for Decimal128 {
    fn sum<I: Iterator<Item = &'a Decimal128>>(iter: I) -> Self {
        iter.fold(Decimal128::ZERO, |sum, value| sum + value)
    }
}

impl Product for Decimal128 {
    fn product<I: Iterator<Item = Decimal128>>(iter: I) -> Self {
        iter.fold(Decimal128::ONE, |product, value| product * value)
    }
}

impl<'a> Product<&'a Decimal128> for Decimal128 {
    fn product<I: Iterator<Item = &'a Decimal128>>(iter: I) -> Self {
        iter.fold(Decimal128::ONE, |product, value| product * value)
    }
}

impl Zero for Decimal128 {
    fn zero() -> Decimal128 {
        Decimal128::ZERO
    }

    fn is_zero(&self) -> bool {
        Decimal128::is_zero(self)
    }
}

impl One for Decimal128 {
    fn one() -> Decimal128 {
        Decimal128::ONE
    }
}

impl Bounded for Decimal128 {
    fn min_value() -> Decimal128 {
        Decimal128::MIN
    }

    fn max_value() -> Decimal128 {
        Decimal128::MAX
    }
}

impl Num for Decimal128 {
    type FromStrRadixErr = Error;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(Error::from("Only radix 10 is supported"));
        }
        crate::str::parse_str_radix_10(str).map(|literal| literal.value)
    }
}

impl Signed for Decimal128 {
    fn abs(&self) -> Self {
        Decimal128::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Decimal128::ZERO
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Decimal128::signum(self)
    }

    fn is_positive(&self) -> bool {
        !self.is_negative() && !Decimal128::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Decimal128::is_negative(self)
    }
}

impl CheckedAdd for Decimal128 {
    #[inline]
    fn checked_add(&self, v: &Decimal128) -> Option<Decimal128> {
        Decimal128::checked_add(*self, *v)
    }
}

impl CheckedSub for Decimal128 {
    #[inline]
    fn checked_sub(&self, v: &Decimal128) -> Option<Decimal128> {
        Decimal128::checked_sub(*self, *v)
    }
}

impl CheckedMul for Decimal128 {
    #[inline]
    fn checked_mul(&self, v: &Decimal128) -> Option<Decimal128> {
        Decimal128::checked_mul(*self, *v)
    }
}

impl CheckedDiv for Decimal128 {
    #[inline]
    fn checked_div(&self, v: &Decimal128) -> Option<Decimal128> {
        Decimal128::checked_div(*self, *v)
    }
}

impl CheckedRem for Decimal128 {
    #[inline]
    fn checked_rem(&self, v: &Decimal128) -> Option<Decimal128> {
        Decimal128::checked_rem(*self, *v)
    }
}

impl CheckedNeg for Decimal128 {
    #[inline]
    fn checked_neg(&self) -> Option<Decimal128> {
        Decimal128::checked_neg(*self)
    }
}

impl WrappingAdd for Decimal128 {
    #[inline]
    fn wrapping_add(&self, v: &Decimal128) -> Decimal128 {
        Decimal128::wrapping_add(*self, *v)
    }
}

impl WrappingSub for Decimal128 {
    #[inline]
    fn wrapping_sub(&self, v: &Decimal128) -> Decimal128 {
        Decimal128::wrapping_sub(*self, *v)
    }
}

impl WrappingMul for Decimal128 {
    #[inline]
    fn wrapping_mul(&self, v: &Decimal128) -> Decimal128 {
        Decimal128::wrapping_mul(*self, *v)
    }
}

impl WrappingNeg for Decimal128 {
    #[inline]
    fn wrapping_neg(&self) -> Decimal128 {
        Decimal128::wrapping_neg(*self)
    }
}
