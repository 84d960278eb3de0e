//! DIT-specific FFT Kernels
//!
//! One call runs every butterfly of a single stage. A stage with butterflies of width
//! `chunk_size` splits the signal into `chunk_size` blocks and combines element `k` of each
//! block's lower half with element `k` of its upper half.
//!
use num_complex::Complex;

use crate::num::FftNum;
use crate::twiddles::twiddle;

/// The radix-2 butterfly.
///
/// `upper` is rotated by `w`, then both outputs are built from the pre-butterfly `lower`.
#[inline(always)]
fn butterfly<T: FftNum>(lower: &mut Complex<T>, upper: &mut Complex<T>, w: Complex<T>) {
    let t = *upper * w;
    *upper = *lower - t;
    *lower = *lower + t;
}

/// DIT stage for butterflies of width `dist << 1`, computing each group's twiddle on the fly
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn fft_dit_chunk_n<T: FftNum>(signal: &mut [Complex<T>], dist: usize) {
    let chunk_size = dist << 1;

    for group in 0..dist {
        let w = twiddle::<T>(group, chunk_size);

        signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
            let (s0, s1) = chunk.split_at_mut(dist);
            butterfly(&mut s0[group], &mut s1[group], w);
        });
    }
}

/// DIT stage for butterflies of width `dist << 1`, reading twiddles from a table of `W_n^k`
///
/// `twiddles` must hold the `n / 2` entries built by [`crate::planner::Planner`] for the
/// signal's length `n`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn fft_dit_chunk_n_with_twiddles<T: FftNum>(
    signal: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    dist: usize,
) {
    let chunk_size = dist << 1;
    let stride = twiddles.len() / dist;

    for group in 0..dist {
        let w = twiddles[group * stride];

        signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
            let (s0, s1) = chunk.split_at_mut(dist);
            butterfly(&mut s0[group], &mut s1[group], w);
        });
    }
}
