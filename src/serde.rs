use crate::{str::to_integer_str_internal, Decimal128, DecimalLiteral};

use alloc::string::ToString;
use core::{fmt, str::FromStr};
use serde::de::Unexpected;

/// Serializes the unscaled value as its base ten integer string, e.g. `"-12345"`.
impl serde::Serialize for Decimal128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value = to_integer_str_internal(self);
        serializer.serialize_str(value.as_str())
    }
}

/// Accepts integer strings as well as native integers from self-describing formats.
impl<'de> serde::Deserialize<'de> for Decimal128 {
    fn deserialize<D>(deserializer: D) -> Result<Decimal128, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(Decimal128Visitor)
    }
}

struct Decimal128Visitor;

impl<'de> serde::de::Visitor<'de> for Decimal128Visitor {
    type Value = Decimal128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 128 bit integer or an integer string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal128, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal128::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal128, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal128::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Decimal128, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal128::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Decimal128, E>
    where
        E: serde::de::Error,
    {
        match i128::try_from(value) {
            Ok(value) => Ok(Decimal128::from(value)),
            Err(_) => Err(E::invalid_value(Unexpected::Other("128 bit unsigned integer"), &self)),
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal128, E>
    where
        E: serde::de::Error,
    {
        Decimal128::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Serializes a literal as its canonical decimal string, e.g. `"123.45"` or `"1.23E+5"`, which
/// preserves both the value and the scale.
impl serde::Serialize for DecimalLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DecimalLiteral {
    fn deserialize<D>(deserializer: D) -> Result<DecimalLiteral, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DecimalLiteralVisitor)
    }
}

struct DecimalLiteralVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalLiteralVisitor {
    type Value = DecimalLiteral;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a decimal string such as \"123.45\" or \"1.23E+5\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<DecimalLiteral, E>
    where
        E: serde::de::Error,
    {
        DecimalLiteral::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
