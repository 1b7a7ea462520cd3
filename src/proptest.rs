use crate::Decimal128;

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for Decimal128 {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(i64, u64)>, fn((i64, u64)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // Every pair of words is a valid value, including MIN and MAX
        any::<(i64, u64)>().prop_map(|(high, low)| Decimal128::from_parts(high, low))
    }
}
