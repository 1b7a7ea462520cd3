use crate::constants::{MAX_DIGITS, POWERS_10};
use crate::decimal::Decimal128;
use crate::error::Error;

pub(crate) fn rescale_impl(value: &Decimal128, original_scale: i32, new_scale: i32) -> Result<Decimal128, Error> {
    let delta_scale = new_scale as i64 - original_scale as i64;
    let abs_delta_scale = delta_scale.unsigned_abs();
    if abs_delta_scale < 1 || abs_delta_scale > MAX_DIGITS as u64 {
        return Err(Error::ScaleDeltaOutOfRange {
            original_scale,
            new_scale,
        });
    }

    let multiplier = POWERS_10[abs_delta_scale as usize];
    let rescaled = if delta_scale < 0 {
        // Scaling down truncates whatever the division leaves behind
        let (quotient, remainder) = value.divide(&multiplier)?;
        if remainder.is_zero() {
            Some(quotient)
        } else {
            None
        }
    } else {
        value.checked_mul(multiplier)
    };

    rescaled.ok_or_else(|| Error::RescaleDataLoss {
        value: value.to_string_with_scale(original_scale),
        original_scale,
        new_scale,
    })
}
