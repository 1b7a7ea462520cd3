use crate::decimal::Decimal128;

pub(crate) const fn shl_impl(value: &Decimal128, bits: u32) -> Decimal128 {
    let (high, low) = (value.high_bits(), value.low_bits());
    if bits == 0 {
        *value
    } else if bits < 64 {
        // Bits leaving the top of the low word enter the bottom of the high word
        let high = (high << bits) | (low >> (64 - bits)) as i64;
        Decimal128::from_parts(high, low << bits)
    } else if bits < 128 {
        Decimal128::from_parts((low << (bits - 64)) as i64, 0)
    } else {
        Decimal128::ZERO
    }
}

// Arithmetic shift: vacated high bits are filled with the sign.
pub(crate) const fn shr_impl(value: &Decimal128, bits: u32) -> Decimal128 {
    let (high, low) = (value.high_bits(), value.low_bits());
    let sign_fill = if high < 0 { -1 } else { 0 };
    if bits == 0 {
        *value
    } else if bits < 64 {
        let low = (low >> bits) | ((high as u64) << (64 - bits));
        Decimal128::from_parts(high >> bits, low)
    } else if bits < 128 {
        Decimal128::from_parts(sign_fill, (high >> (bits - 64)) as u64)
    } else {
        Decimal128::from_parts(sign_fill, sign_fill as u64)
    }
}
