//! FFT Algorithm Implementations
//!
//! This module contains the two stages of the radix-2 Decimation-in-Time FFT.
//!
//! - **Bit reversal**: reorders the input in place so that the butterflies can combine
//!   neighbouring sub-transforms.
//!
//! - **DIT (Decimation-in-Time)**: processes data from small butterflies to large.
//!   Input is bit-reversed, output is in natural order.

pub mod bit_reversal;
pub(crate) mod dit;
