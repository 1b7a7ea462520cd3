#![no_main]

use decimal128::Decimal128;

#[derive(Debug, arbitrary::Arbitrary)]
struct Data {
    a: Decimal128,
    b: Decimal128,
    bits: u32,
    original_scale: i32,
    new_scale: i32,
}

libfuzzer_sys::fuzz_target!(|data: Data| {
    let (a, b) = (i128::from(data.a), i128::from(data.b));

    assert_eq!(i128::from(data.a + data.b), a.wrapping_add(b));
    assert_eq!(i128::from(data.a - data.b), a.wrapping_sub(b));
    assert_eq!(i128::from(data.a * data.b), a.wrapping_mul(b));
    assert_eq!(data.a.checked_mul(data.b).map(i128::from), a.checked_mul(b));
    assert_eq!(data.a.cmp(&data.b), a.cmp(&b));

    match data.a.divide(&data.b) {
        Ok((quotient, remainder)) => {
            assert_eq!(i128::from(quotient), a.wrapping_div(b));
            assert_eq!(i128::from(remainder), a.wrapping_rem(b));
        }
        Err(_) => assert_eq!(b, 0),
    }

    let _ = data.a << data.bits;
    let _ = data.a >> data.bits;
    let _ = data.a.rescale(data.original_scale, data.new_scale);
});
