use alloc::string::{String, ToString};

// `digits` is the unsigned integer string. The first digit is followed by a decimal point only
// when more digits remain, then `E`, an explicit sign and the adjusted exponent.
pub(crate) fn to_scientific_str(digits: &str, adjusted_exponent: i64, is_negative: bool) -> String {
    let mut rep = String::with_capacity(digits.len() + 24);
    if is_negative {
        rep.push('-');
    }
    let (first, rest) = digits.split_at(1);
    rep.push_str(first);
    if !rest.is_empty() {
        rep.push('.');
        rep.push_str(rest);
    }
    rep.push('E');
    if adjusted_exponent >= 0 {
        rep.push('+');
    }
    rep.push_str(&adjusted_exponent.to_string());
    rep
}
