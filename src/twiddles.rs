use num_complex::Complex;

use crate::error::{try_vec, FftError};
use crate::num::FftNum;

/// Twiddle factor `e^(-2πi·k/m)` for group `k` of a butterfly of width `m`.
#[inline]
pub(crate) fn twiddle<T: FftNum>(k: usize, m: usize) -> Complex<T> {
    let angle = -T::TAU() * T::from_index(k) / T::from_index(m);
    let (sin, cos) = angle.sin_cos();
    Complex::new(cos, sin)
}

/// Builds the table `W_n^k` for `k` in `0..n/2`.
///
/// A butterfly of width `m` at group `k` uses entry `k * (n / m)`.
pub(crate) fn generate_twiddles<T: FftNum>(n: usize) -> Result<Vec<Complex<T>>, FftError> {
    let dist = n >> 1;
    let mut twiddles = try_vec![Complex::new(T::zero(), T::zero()); dist];

    twiddles
        .iter_mut()
        .enumerate()
        .for_each(|(k, w)| *w = twiddle(k, n));

    Ok(twiddles)
}
