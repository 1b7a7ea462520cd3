use crate::{error::Error, Decimal128};

use alloc::string::String;
use core::str::FromStr;

mod fmt;
mod fmt_sci;
mod parse;

pub(crate) use self::fmt::to_integer_str_internal;
pub(crate) use self::parse::parse_str_radix_10;

/// A decimal literal parsed from text: the unscaled value together with the precision and
/// scale implied by how it was written.
///
/// `"123.45"` parses to a value of `12345` with a precision of `5` and a scale of `2`, while
/// `"1.23E+5"` parses to `123` with a precision of `3` and a scale of `-3`. Leading zeros never
/// count toward the precision; a literal made up only of zeros reports the number of zeros seen.
///
/// Formatting a literal with `Display` writes the canonical string for its value and scale, so
/// parsing the output yields the same value and scale again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalLiteral {
    pub value: Decimal128,
    pub precision: u32,
    pub scale: i32,
}

impl FromStr for DecimalLiteral {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_str_radix_10(value)
    }
}

impl core::fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.value.to_string_with_scale(self.scale))
    }
}

impl Decimal128 {
    /// Returns the unscaled value as a base ten integer string, e.g. `"-12345"`.
    pub fn to_integer_string(&self) -> String {
        String::from(to_integer_str_internal(self).as_str())
    }

    /// Returns the value as a decimal string with `scale` digits after the decimal point.
    ///
    /// A scale of `0` writes the integer string. Negative scales, and values whose adjusted
    /// exponent (`-scale + digits - 1`) is below `-6`, are written in scientific notation with an
    /// explicitly signed exponent.
    ///
    /// # Example
    ///
    /// ```
    /// # use decimal128::Decimal128;
    /// assert_eq!(Decimal128::from(12345).to_string_with_scale(2), "123.45");
    /// assert_eq!(Decimal128::from(-1).to_string_with_scale(3), "-0.001");
    /// assert_eq!(Decimal128::from(123).to_string_with_scale(-3), "1.23E+5");
    /// ```
    pub fn to_string_with_scale(&self, scale: i32) -> String {
        fmt::to_str_with_scale_internal(self, scale)
    }
}
