use crate::decimal::Decimal128;

use core::cmp::Ordering;

// Ordering the signed high word first and the unsigned low word second orders two's-complement
// values correctly without widening.
pub(crate) const fn cmp_impl(d1: &Decimal128, d2: &Decimal128) -> Ordering {
    let (d1_high, d2_high) = (d1.high_bits(), d2.high_bits());
    if d1_high < d2_high {
        Ordering::Less
    } else if d1_high > d2_high {
        Ordering::Greater
    } else if d1.low_bits() < d2.low_bits() {
        Ordering::Less
    } else if d1.low_bits() > d2.low_bits() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
