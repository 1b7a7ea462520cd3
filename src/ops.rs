// The two-word arithmetic follows the classic two's-complement carry/borrow scheme. Division
// expands both operands into 32 bit limbs and runs Knuth's Algorithm D (TAOCP vol. 2, 4.3.1).

mod add;
mod array;
mod bits;
mod cmp;
mod div;
mod mul;
mod rescale;

pub(crate) use add::{add_impl, sub_impl};
pub(crate) use bits::{shl_impl, shr_impl};
pub(crate) use cmp::cmp_impl;
pub(crate) use div::div_impl;
pub(crate) use mul::{checked_mul_impl, mul_impl};
pub(crate) use rescale::rescale_impl;
