use decimal128::{Decimal128, DecimalLiteral, ErrorKind};
use proptest::prelude::*;
use std::str::FromStr;

fn d(value: i128) -> Decimal128 {
    Decimal128::from(value)
}

// Mixes full-width values with small and single-word magnitudes so that every limb count is hit.
fn values() -> impl Strategy<Value = i128> {
    prop_oneof![
        any::<i128>(),
        any::<i64>().prop_map(i128::from),
        any::<i32>().prop_map(i128::from),
        (any::<i128>(), 0u32..127).prop_map(|(value, bits)| value >> bits),
        Just(i128::MIN),
        Just(i128::MAX),
        Just(0i128),
        Just(-1i128),
    ]
}

proptest! {
    #[test]
    fn prop_add_sub_mul_wrap_like_i128(a in values(), b in values()) {
        prop_assert_eq!(d(a) + d(b), d(a.wrapping_add(b)));
        prop_assert_eq!(d(a) - d(b), d(a.wrapping_sub(b)));
        prop_assert_eq!(d(a) * d(b), d(a.wrapping_mul(b)));
        prop_assert_eq!(d(a).checked_add(d(b)), a.checked_add(b).map(d));
        prop_assert_eq!(d(a).checked_sub(d(b)), a.checked_sub(b).map(d));
        prop_assert_eq!(d(a).checked_mul(d(b)), a.checked_mul(b).map(d));
    }

    #[test]
    fn prop_divide_matches_i128(a in values(), b in values()) {
        let result = d(a).divide(&d(b));
        if b == 0 {
            prop_assert!(result.is_err());
        } else {
            let (quotient, remainder) = result.unwrap();
            prop_assert_eq!(quotient, d(a.wrapping_div(b)));
            prop_assert_eq!(remainder, d(a.wrapping_rem(b)));
            // quotient * divisor + remainder reconstructs the dividend
            prop_assert_eq!(quotient * d(b) + remainder, d(a));
        }
    }

    #[test]
    fn prop_negate_and_compare_match_i128(a in values(), b in values()) {
        let mut negated = d(a);
        negated.negate();
        prop_assert_eq!(negated, d(a.wrapping_neg()));
        prop_assert_eq!(d(a).cmp(&d(b)), a.cmp(&b));
        prop_assert_eq!(d(a) == d(b), a == b);
    }

    #[test]
    fn prop_shifts_match_i128(a in values(), bits in 0u32..200) {
        let expected_left = if bits < 128 { a.wrapping_shl(bits) } else { 0 };
        let expected_right = if bits < 128 { a >> bits } else if a < 0 { -1 } else { 0 };
        prop_assert_eq!(d(a) << bits, d(expected_left));
        prop_assert_eq!(d(a) >> bits, d(expected_right));
    }

    #[test]
    fn prop_integer_string_matches_i128(a in values()) {
        prop_assert_eq!(d(a).to_string(), a.to_string());
        prop_assert_eq!(Decimal128::from_str(&a.to_string()).unwrap(), d(a));
    }

    #[test]
    fn prop_scaled_strings_round_trip(a in values(), scale in -1000i32..1000) {
        let formatted = d(a).to_string_with_scale(scale);
        let parsed = DecimalLiteral::from_str(&formatted).unwrap();
        prop_assert_eq!(parsed.value, d(a), "{}", formatted);
        prop_assert_eq!(parsed.scale, scale, "{}", formatted);
    }

    #[test]
    fn prop_rescale_is_exact_or_fails(a in values(), original in -50i32..50, delta in 1i32..=38, up in any::<bool>()) {
        let power = 10i128.pow(delta as u32);
        if up {
            let result = d(a).rescale(original, original + delta);
            match a.checked_mul(power) {
                Some(expected) => prop_assert_eq!(result.unwrap(), d(expected)),
                None => prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::DataLoss),
            }
        } else {
            let result = d(a).rescale(original, original - delta);
            if a % power == 0 {
                prop_assert_eq!(result.unwrap(), d(a / power));
            } else {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::DataLoss);
            }
        }
    }
}
