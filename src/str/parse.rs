use crate::{
    constants::{MAX_I64_SCALE, POWERS_10_U64},
    error::{tail_invalid, Error},
    str::DecimalLiteral,
    Decimal128,
};

use alloc::format;

// Implements `(+|-)?0*(\d*)(\.\d+)?((E|e)(+|-)?\d+)?` with at least one digit in the mantissa.
pub(crate) fn parse_str_radix_10(input: &str) -> Result<DecimalLiteral, Error> {
    let bytes = input.as_bytes();
    let (first, rest) = match bytes.split_first() {
        Some(split) => split,
        None => return tail_invalid(input, "Empty string cannot be converted to decimal"),
    };
    let (negative, digits) = match *first {
        b'-' => (true, rest),
        b'+' => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return tail_invalid(
            input,
            format!("Single character '{}' is not a valid decimal value", *first as char),
        );
    }

    // Leading zeros don't count toward the precision
    let leading_zeros = digits.iter().take_while(|b| **b == b'0').count();
    let digits = &digits[leading_zeros..];
    if digits.is_empty() {
        return Ok(DecimalLiteral {
            value: Decimal128::ZERO,
            precision: to_u32(input, leading_zeros)?,
            scale: 0,
        });
    }

    let (whole, rest) = split_digits(digits);
    let (fractional, rest) = match rest.split_first() {
        Some((b'.', after)) => {
            match after.first() {
                None => {
                    return tail_invalid(
                        input,
                        "Decimal point must be followed by at least one base ten digit. Reached the end of the string",
                    )
                }
                Some(b) if !b.is_ascii_digit() => {
                    return tail_invalid(
                        input,
                        format!(
                            "Decimal point must be followed by a base ten digit. Found '{}'",
                            unexpected(input, after)
                        ),
                    )
                }
                Some(_) => split_digits(after),
            }
        }
        _ => (&[][..], rest),
    };

    if leading_zeros == 0 && whole.is_empty() && fractional.is_empty() {
        return tail_invalid(
            input,
            format!(
                "Expected base ten digit or decimal point but found '{}' instead",
                unexpected(input, rest)
            ),
        );
    }

    // An all-zero mantissa with an exponent (e.g. `0E+3`) keeps its zeros as precision
    let significant = whole.len() + fractional.len();
    let precision = to_u32(input, if significant == 0 { leading_zeros } else { significant })?;

    let scale = match rest.split_first() {
        None => to_u32(input, fractional.len())? as i64,
        Some((b'E' | b'e', exponent)) => {
            let exponent = parse_exponent(input, exponent)?;
            -(exponent as i64) + (precision as i64 - 1)
        }
        Some(_) => {
            return tail_invalid(
                input,
                format!(
                    "Found non base ten digit character '{}' before the end of the string",
                    unexpected(input, rest)
                ),
            )
        }
    };
    let scale = match i32::try_from(scale) {
        Ok(scale) => scale,
        Err(_) => return tail_invalid(input, format!("Scale {} is outside the supported range", scale)),
    };

    Ok(DecimalLiteral {
        value: accumulate(input, whole, fractional, negative)?,
        precision,
        scale,
    })
}

fn split_digits(bytes: &[u8]) -> (&[u8], &[u8]) {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    bytes.split_at(len)
}

// `rest` is always a suffix of `input` that starts after ASCII bytes, so slicing is on a char
// boundary.
fn unexpected(input: &str, rest: &[u8]) -> char {
    input[input.len() - rest.len()..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn to_u32(input: &str, count: usize) -> Result<u32, Error> {
    match u32::try_from(count) {
        Ok(count) => Ok(count),
        Err(_) => tail_invalid(input, "Too many digits"),
    }
}

fn parse_exponent(input: &str, bytes: &[u8]) -> Result<i32, Error> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return tail_invalid(input, "Exponent must contain at least one base ten digit");
    }

    let mut exponent: i32 = 0;
    for (index, b) in digits.iter().enumerate() {
        if !b.is_ascii_digit() {
            return tail_invalid(
                input,
                format!(
                    "Found non decimal digit exponent value '{}'",
                    unexpected(input, &digits[index..])
                ),
            );
        }
        let digit = (b - b'0') as i32;
        let next = exponent.checked_mul(10).and_then(|e| {
            if negative {
                e.checked_sub(digit)
            } else {
                e.checked_add(digit)
            }
        });
        exponent = match next {
            Some(next) => next,
            None => return tail_invalid(input, "Exponent is outside the range of a 32 bit integer"),
        };
    }
    Ok(exponent)
}

// Builds the unscaled value from the concatenated digit runs, 18 digits at a time. The value is
// accumulated in the direction of its sign so that -2^127 is reachable.
fn accumulate(input: &str, whole: &[u8], fractional: &[u8], negative: bool) -> Result<Decimal128, Error> {
    let mut value = Decimal128::ZERO;
    let mut chunk = 0u64;
    let mut chunk_len = 0;
    for b in whole.iter().chain(fractional) {
        chunk = chunk * 10 + (b - b'0') as u64;
        chunk_len += 1;
        if chunk_len == MAX_I64_SCALE {
            value = push_chunk(input, value, chunk, chunk_len, negative)?;
            chunk = 0;
            chunk_len = 0;
        }
    }
    if chunk_len > 0 {
        value = push_chunk(input, value, chunk, chunk_len, negative)?;
    }
    Ok(value)
}

fn push_chunk(input: &str, value: Decimal128, chunk: u64, chunk_len: usize, negative: bool) -> Result<Decimal128, Error> {
    let chunk = Decimal128::from(chunk);
    let next = value
        .checked_mul(Decimal128::from(POWERS_10_U64[chunk_len]))
        .and_then(|shifted| {
            if negative {
                shifted.checked_sub(chunk)
            } else {
                shifted.checked_add(chunk)
            }
        });
    match next {
        Some(next) => Ok(next),
        None => tail_invalid(input, "Value exceeds the range of a 128 bit decimal"),
    }
}
