use crate::Decimal128;

use arbitrary::{Arbitrary, Result, Unstructured};

impl<'a> Arbitrary<'a> for Decimal128 {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let high = i64::arbitrary(u)?;
        let low = u64::arbitrary(u)?;
        Ok(Decimal128::from_parts(high, low))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        arbitrary::size_hint::and(i64::size_hint(depth), u64::size_hint(depth))
    }
}
