#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
extern crate alloc;

mod arithmetic_impls;
mod constants;
mod decimal;
mod error;
mod ops;
mod str;

#[cfg(feature = "rust-fuzz")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "rand")]
mod rand;
#[cfg(feature = "serde")]
mod serde;

pub use constants::{MAX_DIGITS, POWERS_10};
pub use decimal::Decimal128;
pub use error::{Error, ErrorKind};
pub use str::DecimalLiteral;

/// A convenience module appropriate for glob imports (`use decimal128::prelude::*;`).
pub mod prelude {
    pub use crate::{Decimal128, DecimalLiteral, Error, ErrorKind};
    pub use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
}
