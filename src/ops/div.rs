use crate::decimal::Decimal128;
use crate::error::Error;
use crate::ops::array::{build_from_array, fill_in_array, shift_array_left, shift_array_right, Limbs};

pub(crate) fn div_impl(dividend: &Decimal128, divisor: &Decimal128) -> Result<(Decimal128, Decimal128), Error> {
    // Split the dividend and divisor into limbs so that we can work on them. The dividend gets
    // an extra zero limb up front to absorb the normalization shift.
    let mut dividend_array = Limbs::new();
    dividend_array.push(0);
    let dividend_was_negative = fill_in_array(dividend, &mut dividend_array);
    let mut divisor_array = Limbs::new();
    let divisor_was_negative = fill_in_array(divisor, &mut divisor_array);

    // Handle some of the easy cases.
    if dividend_array.len() <= divisor_array.len() {
        return Ok((Decimal128::ZERO, *dividend));
    }

    if divisor_array.is_empty() {
        return Err(Error::DivisionByZero);
    }

    let (mut quotient, mut remainder) = if divisor_array.len() == 1 {
        single_divide(&dividend_array, divisor_array[0])?
    } else {
        long_divide(&mut dividend_array, &mut divisor_array)?
    };

    if dividend_was_negative != divisor_was_negative {
        quotient.negate();
    }
    if dividend_was_negative {
        remainder.negate();
    }
    Ok((quotient, remainder))
}

// Division where the divisor fits into a single limb. Each step divides the running remainder
// with the next limb appended, which always fits in 64 bits since the remainder is below the
// divisor.
fn single_divide(dividend: &[u32], divisor: u32) -> Result<(Decimal128, Decimal128), Error> {
    let divisor = divisor as u64;
    let mut remainder = 0u64;
    let mut quotient = Limbs::new();
    for limb in dividend {
        remainder = (remainder << 32) | *limb as u64;
        quotient.push((remainder / divisor) as u32);
        remainder %= divisor;
    }
    Ok((build_from_array(&quotient)?, Decimal128::from(remainder)))
}

// Knuth's Algorithm D for a divisor of at least two limbs. Both arrays are normalized in place;
// on return the dividend has been reduced to the remainder.
fn long_divide(dividend: &mut Limbs, divisor: &mut Limbs) -> Result<(Decimal128, Decimal128), Error> {
    let divisor_length = divisor.len();
    let result_length = dividend.len() - divisor_length;
    let mut quotient = Limbs::new();

    // Normalize by shifting both by the same number of bits so that the top bit of the divisor
    // is set. This bounds the error of each digit estimate to two.
    let normalize_bits = divisor[0].leading_zeros();
    shift_array_left(divisor, normalize_bits);
    shift_array_left(dividend, normalize_bits);

    let divisor_high = divisor[0] as u64;
    let divisor_next = divisor[1] as u64;

    for j in 0..result_length {
        // Estimate the next digit from the top two limbs. At worst it is two too large.
        let high_dividend = ((dividend[j] as u64) << 32) | dividend[j + 1] as u64;
        let mut guess = if dividend[j] as u64 == divisor_high {
            u32::MAX as u64
        } else {
            high_dividend / divisor_high
        };
        let mut rhat = high_dividend - guess * divisor_high;

        // Catch all of the cases where the guess is two too large and most of the cases where
        // it is one too large. Once rhat no longer fits in a limb the test can't succeed.
        while rhat <= u32::MAX as u64 && divisor_next * guess > (rhat << 32) + dividend[j + 2] as u64 {
            guess -= 1;
            rhat += divisor_high;
        }

        // Subtract guess * divisor from the window of the dividend
        let mut mult = 0u64;
        for i in (0..divisor_length).rev() {
            mult += guess * divisor[i] as u64;
            let prev = dividend[j + i + 1];
            dividend[j + i + 1] = prev.wrapping_sub(mult as u32);
            mult >>= 32;
            if dividend[j + i + 1] > prev {
                mult += 1;
            }
        }
        let prev = dividend[j] as u64;
        dividend[j] = prev.wrapping_sub(mult) as u32;

        // If the guess was still too big, add the divisor back once
        if mult > prev {
            guess -= 1;
            let mut carry = 0u64;
            for i in (0..divisor_length).rev() {
                let sum = divisor[i] as u64 + dividend[j + i + 1] as u64 + carry;
                dividend[j + i + 1] = sum as u32;
                carry = sum >> 32;
            }
            dividend[j] = dividend[j].wrapping_add(carry as u32);
        }

        quotient.push(guess as u32);
    }

    // Denormalize the remainder
    shift_array_right(dividend, normalize_bits);

    Ok((build_from_array(&quotient)?, build_from_array(dividend)?))
}
