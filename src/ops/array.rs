use crate::decimal::Decimal128;
use crate::error::Error;

use arrayvec::ArrayVec;

/// Four 32 bit limbs hold any 128 bit magnitude. Division adds one leading zero limb to the
/// dividend, hence five.
pub(crate) const MAX_LIMBS: usize = 5;

pub(crate) type Limbs = ArrayVec<u32, MAX_LIMBS>;

/// Expands the magnitude of `value` into `limbs`, most significant limb first, with leading
/// zero limbs dropped. Zero produces no limbs. Returns whether the value was negative.
pub(crate) fn fill_in_array(value: &Decimal128, limbs: &mut Limbs) -> bool {
    let (high, low) = value.unsigned_abs();
    let words = [(high >> 32) as u32, high as u32, (low >> 32) as u32, low as u32];
    let significant = words.iter().position(|limb| *limb != 0).unwrap_or(words.len());
    limbs.extend(words[significant..].iter().copied());
    value.is_negative()
}

/// Shift the limbs left by `bits` positions (`0 <= bits < 32`). Bits shifted out of the first
/// limb are lost.
pub(crate) fn shift_array_left(limbs: &mut [u32], bits: u32) {
    if limbs.is_empty() || bits == 0 {
        return;
    }
    let last = limbs.len() - 1;
    for i in 0..last {
        limbs[i] = (limbs[i] << bits) | (limbs[i + 1] >> (32 - bits));
    }
    limbs[last] <<= bits;
}

/// Shift the limbs right by `bits` positions (`0 <= bits < 32`).
pub(crate) fn shift_array_right(limbs: &mut [u32], bits: u32) {
    if limbs.is_empty() || bits == 0 {
        return;
    }
    for i in (1..limbs.len()).rev() {
        limbs[i] = (limbs[i] >> bits) | (limbs[i - 1] << (32 - bits));
    }
    limbs[0] >>= bits;
}

/// Folds most-significant-first limbs back into a value. Five limbs are accepted only when
/// the first one is zero.
pub(crate) fn build_from_array(limbs: &[u32]) -> Result<Decimal128, Error> {
    let combine = |high: u32, low: u32| ((high as u64) << 32) | low as u64;
    let value = match *limbs {
        [] => Decimal128::ZERO,
        [a] => Decimal128::from_parts(0, a as u64),
        [a, b] => Decimal128::from_parts(0, combine(a, b)),
        [a, b, c] => Decimal128::from_parts(a as i64, combine(b, c)),
        [a, b, c, d] => Decimal128::from_parts(combine(a, b) as i64, combine(c, d)),
        [0, a, b, c, d] => Decimal128::from_parts(combine(a, b) as i64, combine(c, d)),
        _ => return Err(Error::UnsupportedLimbCount(limbs.len())),
    };
    Ok(value)
}
