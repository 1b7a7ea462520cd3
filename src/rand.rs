use crate::Decimal128;

use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution, Standard,
    },
    Rng,
};

/// Draws from the full 128 bit range.
impl Distribution<Decimal128> for Standard {
    fn sample<R>(&self, rng: &mut R) -> Decimal128
    where
        R: Rng + ?Sized,
    {
        Decimal128::from_parts(rng.gen(), rng.gen())
    }
}

impl SampleUniform for Decimal128 {
    type Sampler = Decimal128Sampler;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decimal128Sampler {
    sampler: UniformInt<i128>,
}

impl UniformSampler for Decimal128Sampler {
    type X = Decimal128;

    /// Creates a new sampler that will yield values in `[low, high)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use decimal128::Decimal128;
    /// # use rand::Rng;
    /// let mut rng = rand::thread_rng();
    /// let random = rng.gen_range(Decimal128::from(-5)..Decimal128::from(5));
    /// assert!(random >= Decimal128::from(-5));
    /// assert!(random < Decimal128::from(5));
    /// ```
    #[inline]
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        Self {
            sampler: UniformInt::new(i128::from(*low.borrow()), i128::from(*high.borrow())),
        }
    }

    #[inline]
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        Self {
            sampler: UniformInt::new_inclusive(i128::from(*low.borrow()), i128::from(*high.borrow())),
        }
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Decimal128::from(self.sampler.sample(rng))
    }
}

#[cfg(test)]
mod rand_tests {
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn has_random_instances() {
        let mut rng = StdRng::seed_from_u64(7);
        let random: [Decimal128; 32] = rng.gen();
        assert!(random.windows(2).any(|slice| slice[0] != slice[1]));
    }

    #[test]
    fn generates_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..128 {
            let random = rng.gen_range(Decimal128::MIN..Decimal128::from(-100));
            assert!(random < Decimal128::from(-100));
        }
    }

    #[test]
    fn generates_within_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut values = HashSet::new();
        for _ in 0..256 {
            let random = rng.gen_range(Decimal128::from(100)..=Decimal128::from(101));
            assert!(random == Decimal128::from(100) || random == Decimal128::from(101));
            values.insert(random);
        }
        assert_eq!(values.len(), 2);
    }
}
