//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
use log::trace;
use num_complex::Complex;

use crate::algorithms::bit_reversal::bit_reverse_permutation;
use crate::kernels::dit::{fft_dit_chunk_n, fft_dit_chunk_n_with_twiddles};
use crate::num::FftNum;

/// Where a stage gets its twiddle factors from
#[derive(Clone, Copy)]
pub(crate) enum StageTwiddles<'a, T> {
    /// Recomputed with `sin_cos` for every group of every stage
    PerGroup,
    /// Looked up in a table of `N / 2` roots of unity
    Table(&'a [Complex<T>]),
}

/// Execute a single DIT stage, dispatching to the kernel matching the twiddle source.
#[inline]
fn execute_dit_stage<T: FftNum>(
    signal: &mut [Complex<T>],
    stage: usize,
    twiddles: StageTwiddles<'_, T>,
) {
    let dist = 1 << stage;

    trace!("dit stage {stage}: butterfly size {}", dist << 1);

    match twiddles {
        StageTwiddles::PerGroup => fft_dit_chunk_n(signal, dist),
        StageTwiddles::Table(table) => fft_dit_chunk_n_with_twiddles(signal, table, dist),
    }
}

/// In-place DIT FFT of a signal whose length has already been validated.
///
/// Runs the bit-reversal permutation, then `log2(N)` butterfly stages. There is no way to run
/// the stages without the permutation.
pub(crate) fn fft_dit_in_place<T: FftNum>(
    signal: &mut [Complex<T>],
    twiddles: StageTwiddles<'_, T>,
) {
    debug_assert!(signal.len().is_power_of_two());

    let log_n = signal.len().ilog2() as usize;

    bit_reverse_permutation(signal);

    for stage in 0..log_n {
        execute_dit_stage(signal, stage, twiddles);
    }
}
