use crate::decimal::Decimal128;

pub(crate) const fn add_impl(d1: &Decimal128, d2: &Decimal128) -> Decimal128 {
    let d1_low = d1.low_bits();
    let low = d1_low.wrapping_add(d2.low_bits());
    let mut high = d1.high_bits().wrapping_add(d2.high_bits());

    // Propagate the carry. Wrapping add would cause low to be less than d1_low
    if low < d1_low {
        high = high.wrapping_add(1);
    }
    Decimal128::from_parts(high, low)
}

pub(crate) const fn sub_impl(d1: &Decimal128, d2: &Decimal128) -> Decimal128 {
    let d1_low = d1.low_bits();
    let low = d1_low.wrapping_sub(d2.low_bits());
    let mut high = d1.high_bits().wrapping_sub(d2.high_bits());

    // Propagate the borrow. Wrapping sub would cause low to be greater than d1_low
    if low > d1_low {
        high = high.wrapping_sub(1);
    }
    Decimal128::from_parts(high, low)
}
