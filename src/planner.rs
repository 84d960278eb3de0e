//! The planner module provides a convenient interface for reusing twiddle factors across
//! many transforms of the same size.
use log::debug;
use num_complex::Complex;

use crate::error::{validate_len, FftError};
use crate::num::FftNum;
use crate::twiddles::generate_twiddles;

/// The planner is responsible for pre-computing and storing twiddle factors for all the
/// `log_2(N)` stages of the FFT.
///
/// The table holds `W_N^k = e^(-2πi·k/N)` for `k` in `0..N/2`; every stage indexes into it
/// with a stride. A planner is immutable once built and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Planner<T> {
    pub(crate) twiddles: Vec<Complex<T>>,
    pub(crate) log_n: usize,
}

impl<T: FftNum> Planner<T> {
    /// Create a `Planner` for an FFT of size `num_points`.
    ///
    /// Fails if `num_points` is zero, is not a power of 2, or the table cannot be allocated.
    pub fn new(num_points: usize) -> Result<Self, FftError> {
        validate_len(num_points)?;

        let twiddles = generate_twiddles(num_points)?;
        let log_n = num_points.ilog2() as usize;

        debug!(
            "planned {num_points}-point fft with {} twiddles",
            twiddles.len()
        );

        Ok(Self { twiddles, log_n })
    }

    /// The twiddle factors, `W_N^k` for `k` in `0..N/2`
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    /// The log2 of the FFT size
    pub fn log_n(&self) -> usize {
        self.log_n
    }

    /// Number of points this planner was built for
    pub fn len(&self) -> usize {
        1 << self.log_n
    }

    /// Always `false`: a planner covers at least one point
    pub fn is_empty(&self) -> bool {
        false
    }
}
