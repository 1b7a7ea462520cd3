use crate::Decimal128;

/// The maximum number of decimal digits that always fit in a signed 128 bit integer.
pub const MAX_DIGITS: u32 = 38;

// The maximum power of 10 that a 64 bit integer can take on without overflowing a single
// multiply-add when accumulating digit chunks.
pub(crate) const MAX_I64_SCALE: usize = 18;

// Sign plus the 39 digits of -2^127, with headroom.
pub(crate) const MAX_STR_BUFFER_SIZE: usize = 48;

pub(crate) const U32_MASK: u64 = u32::MAX as _;
pub(crate) const U32_CARRY: u64 = 1 << 32;

/// `10^0` through `10^38`, indexed by exponent.
pub static POWERS_10: [Decimal128; MAX_DIGITS as usize + 1] = [
    Decimal128::from_parts(0x0, 0x1),
    Decimal128::from_parts(0x0, 0xa),
    Decimal128::from_parts(0x0, 0x64),
    Decimal128::from_parts(0x0, 0x3e8),
    Decimal128::from_parts(0x0, 0x2710),
    Decimal128::from_parts(0x0, 0x186a0),
    Decimal128::from_parts(0x0, 0xf4240),
    Decimal128::from_parts(0x0, 0x989680),
    Decimal128::from_parts(0x0, 0x5f5e100),
    Decimal128::from_parts(0x0, 0x3b9aca00),
    Decimal128::from_parts(0x0, 0x2540be400),
    Decimal128::from_parts(0x0, 0x174876e800),
    Decimal128::from_parts(0x0, 0xe8d4a51000),
    Decimal128::from_parts(0x0, 0x9184e72a000),
    Decimal128::from_parts(0x0, 0x5af3107a4000),
    Decimal128::from_parts(0x0, 0x38d7ea4c68000),
    Decimal128::from_parts(0x0, 0x2386f26fc10000),
    Decimal128::from_parts(0x0, 0x16345785d8a0000),
    Decimal128::from_parts(0x0, 0xde0b6b3a7640000),
    Decimal128::from_parts(0x0, 0x8ac7230489e80000),
    Decimal128::from_parts(0x5, 0x6bc75e2d63100000),
    Decimal128::from_parts(0x36, 0x35c9adc5dea00000),
    Decimal128::from_parts(0x21e, 0x19e0c9bab2400000),
    Decimal128::from_parts(0x152d, 0x2c7e14af6800000),
    Decimal128::from_parts(0xd3c2, 0x1bcecceda1000000),
    Decimal128::from_parts(0x84595, 0x161401484a000000),
    Decimal128::from_parts(0x52b7d2, 0xdcc80cd2e4000000),
    Decimal128::from_parts(0x33b2e3c, 0x9fd0803ce8000000),
    Decimal128::from_parts(0x204fce5e, 0x3e25026110000000),
    Decimal128::from_parts(0x1431e0fae, 0x6d7217caa0000000),
    Decimal128::from_parts(0xc9f2c9cd0, 0x4674edea40000000),
    Decimal128::from_parts(0x7e37be2022, 0xc0914b2680000000),
    Decimal128::from_parts(0x4ee2d6d415b, 0x85acef8100000000),
    Decimal128::from_parts(0x314dc6448d93, 0x38c15b0a00000000),
    Decimal128::from_parts(0x1ed09bead87c0, 0x378d8e6400000000),
    Decimal128::from_parts(0x13426172c74d82, 0x2b878fe800000000),
    Decimal128::from_parts(0xc097ce7bc90715, 0xb34b9f1000000000),
    Decimal128::from_parts(0x785ee10d5da46d9, 0xf436a000000000),
    Decimal128::from_parts(0x4b3b4ca85a86c47a, 0x98a224000000000),
];

// Fast access for 10^n where n is 0-18, used when accumulating parsed digit chunks.
pub(crate) static POWERS_10_U64: [u64; MAX_I64_SCALE + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

pub(crate) const TEN_TO_18: Decimal128 = Decimal128::from_parts(0x0, 0xde0b6b3a7640000);
pub(crate) const TEN_TO_36: Decimal128 = Decimal128::from_parts(0xc097ce7bc90715, 0xb34b9f1000000000);
