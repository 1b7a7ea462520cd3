#![no_main]

use core::str::FromStr;
use decimal128::{Decimal128, DecimalLiteral};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    generic_str: &'a str,

    value: Decimal128,
    scale: i16,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let _ = serde_json::from_str::<Decimal128>(data.generic_str);

    if let Ok(literal) = DecimalLiteral::from_str(data.generic_str) {
        let reparsed = DecimalLiteral::from_str(&literal.to_string()).unwrap();
        assert_eq!(reparsed.value, literal.value);
        assert_eq!(reparsed.scale, literal.scale);
    }

    let formatted = data.value.to_string_with_scale(data.scale.into());
    let parsed = DecimalLiteral::from_str(&formatted).unwrap();
    assert_eq!(parsed.value, data.value);
    assert_eq!(parsed.scale, i32::from(data.scale));
});
