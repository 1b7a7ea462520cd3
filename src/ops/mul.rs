use crate::constants::{U32_CARRY, U32_MASK};
use crate::decimal::Decimal128;

// Schoolbook multiplication over 32 bit limbs. Only partial products landing below bit 128 are
// accumulated; everything above is deliberately discarded so the result wraps like a native
// integer. Overflow is not detected here, see `checked_mul_impl` for that.
pub(crate) const fn mul_impl(d1: &Decimal128, d2: &Decimal128) -> Decimal128 {
    // Break the left and right numbers into 32 bit chunks so that we can multiply them
    // without overflow. l0/r0 are the most significant.
    let l0 = (d1.high_bits() as u64) >> 32;
    let l1 = (d1.high_bits() as u64) & U32_MASK;
    let l2 = d1.low_bits() >> 32;
    let l3 = d1.low_bits() & U32_MASK;

    let r0 = (d2.high_bits() as u64) >> 32;
    let r1 = (d2.high_bits() as u64) & U32_MASK;
    let r2 = d2.low_bits() >> 32;
    let r3 = d2.low_bits() & U32_MASK;

    let mut product = l3 * r3;
    let mut low = product & U32_MASK;
    let mut sum = product >> 32;

    // Bit 32. The first addition cannot overflow; the second can, and a wrapped sum carries
    // 2^96 into the result, i.e. 2^32 into the high word.
    product = l2 * r3;
    sum += product;
    product = l3 * r2;
    sum = sum.wrapping_add(product);
    let mut high = if sum < product { U32_CARRY } else { 0 };

    low |= sum << 32;
    high = high.wrapping_add(sum >> 32);

    // Bit 64
    high = high
        .wrapping_add(l1 * r3)
        .wrapping_add(l2 * r2)
        .wrapping_add(l3 * r1);

    // Bit 96. Only the low half of these products survives.
    let top = (l0 * r3)
        .wrapping_add(l1 * r2)
        .wrapping_add(l2 * r1)
        .wrapping_add(l3 * r0);
    high = high.wrapping_add(top << 32);

    Decimal128::from_parts(high as i64, low)
}

pub(crate) fn checked_mul_impl(d1: &Decimal128, d2: &Decimal128) -> Option<Decimal128> {
    let negative = d1.is_negative() != d2.is_negative();
    let (d1_high, d1_low) = d1.unsigned_abs();
    let (d2_high, d2_low) = d2.unsigned_abs();

    // Both magnitudes at or above 2^64 means the product is at least 2^128
    if d1_high != 0 && d2_high != 0 {
        return None;
    }

    // Full 256 bit product of the magnitudes, least significant limb first
    let left = [d1_low as u32, (d1_low >> 32) as u32, d1_high as u32, (d1_high >> 32) as u32];
    let right = [d2_low as u32, (d2_low >> 32) as u32, d2_high as u32, (d2_high >> 32) as u32];
    let mut product = [0u32; 8];
    for (i, &l) in left.iter().enumerate() {
        if l == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &r) in right.iter().enumerate() {
            let t = l as u64 * r as u64 + product[i + j] as u64 + carry;
            product[i + j] = t as u32;
            carry = t >> 32;
        }
        product[i + 4] = carry as u32;
    }
    if product[4..].iter().any(|limb| *limb != 0) {
        return None;
    }

    let high = ((product[3] as u64) << 32) | product[2] as u64;
    let low = ((product[1] as u64) << 32) | product[0] as u64;

    // The magnitude must fit in 127 bits, except for exactly 2^127 when the result is MIN
    if high > i64::MAX as u64 && !(negative && high == 1 << 63 && low == 0) {
        return None;
    }
    let result = Decimal128::from_parts(high as i64, low);
    Some(if negative { result.wrapping_neg() } else { result })
}
