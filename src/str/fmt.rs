use crate::{
    constants::{MAX_STR_BUFFER_SIZE, TEN_TO_18, TEN_TO_36},
    str::fmt_sci::to_scientific_str,
    Decimal128,
};

use alloc::string::{String, ToString};
use arrayvec::ArrayString;
use core::fmt::Write;

// Scientific notation is used once the adjusted exponent drops below this.
const MIN_PLAIN_EXPONENT: i64 = -6;

/// Writes the unscaled value as base ten digits. The value is split into at most three chunks of
/// `10^36`, `10^18` and the rest; only the leading chunk carries the sign and every following chunk
/// is zero padded to 18 digits.
pub(crate) fn to_integer_str_internal(value: &Decimal128) -> ArrayString<MAX_STR_BUFFER_SIZE> {
    let mut rep = ArrayString::new();

    let (top, mut remainder) = divide_by_constant(value, &TEN_TO_36);
    let mut leading = true;
    if !top.is_zero() {
        push_chunk(&mut rep, &top, false);
        remainder.set_abs();
        leading = false;
    }

    let (middle, mut tail) = divide_by_constant(&remainder, &TEN_TO_18);
    if !leading || !middle.is_zero() {
        push_chunk(&mut rep, &middle, !leading);
        tail.set_abs();
        leading = false;
    }

    push_chunk(&mut rep, &tail, !leading);
    rep
}

fn divide_by_constant(value: &Decimal128, divisor: &Decimal128) -> (Decimal128, Decimal128) {
    match value.divide(divisor) {
        Ok(result) => result,
        Err(err) => unreachable!("dividing by a non-zero power of ten failed: {}", err),
    }
}

// Every chunk is below 10^18 in magnitude so the low word holds it as an i64.
fn push_chunk(rep: &mut ArrayString<MAX_STR_BUFFER_SIZE>, chunk: &Decimal128, zero_pad: bool) {
    let chunk = chunk.low_bits() as i64;
    let result = if zero_pad {
        write!(rep, "{:018}", chunk)
    } else {
        write!(rep, "{}", chunk)
    };
    debug_assert!(result.is_ok(), "decimal string buffer overflowed");
}

pub(crate) fn to_str_with_scale_internal(value: &Decimal128, scale: i32) -> String {
    let digits = to_integer_str_internal(value);
    if scale == 0 {
        return digits.to_string();
    }

    let is_negative = value.is_negative();
    let unsigned = if is_negative { &digits[1..] } else { &digits[..] };
    let adjusted_exponent = -(scale as i64) + (unsigned.len() as i64 - 1);
    if scale < 0 || adjusted_exponent < MIN_PLAIN_EXPONENT {
        return to_scientific_str(unsigned, adjusted_exponent, is_negative);
    }

    // A non-negative adjusted exponent of at least -6 bounds the scale by the digit count plus 6
    let scale = scale as usize;
    let mut rep = String::with_capacity(unsigned.len() + 9);
    if is_negative {
        rep.push('-');
    }
    if unsigned.len() > scale {
        let (whole, fractional) = unsigned.split_at(unsigned.len() - scale);
        rep.push_str(whole);
        rep.push('.');
        rep.push_str(fractional);
    } else {
        rep.push_str("0.");
        for _ in unsigned.len()..scale {
            rep.push('0');
        }
        rep.push_str(unsigned);
    }
    rep
}
