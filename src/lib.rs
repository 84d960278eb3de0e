//! An in-place radix-2 decimation-in-time FFT.
//!
//! The transform reorders a power-of-two length signal into bit-reversed order, then runs
//! `log2(N)` stages of butterflies over it. The caller's buffer holds the spectrum, in natural
//! frequency order, once the call returns.
//!
//! ```
//! use ditfft::{fft_dit, Complex64};
//!
//! let mut signal = vec![Complex64::new(1.0, 0.0); 4];
//! fft_dit(&mut signal).unwrap();
//! assert_eq!(signal[0], Complex64::new(4.0, 0.0));
//! ```
use log::debug;

use crate::algorithms::dit::{fft_dit_in_place, StageTwiddles};
use crate::error::{try_vec, validate_len};
use crate::options::TwiddleStrategy;

pub use crate::algorithms::bit_reversal::bit_reverse_permutation;
pub use crate::error::FftError;
pub use crate::num::FftNum;
pub use crate::options::Options;
pub use crate::planner::Planner;
pub use num_complex::{Complex, Complex32, Complex64};

pub mod algorithms;
pub mod analysis;
mod error;
mod kernels;
mod num;
pub mod options;
pub mod planner;
pub mod report;
pub mod signal;
mod twiddles;

/// FFT -- Decimation in Time, with default [`Options`]
///
/// The input is in natural order and so is the output. `signal` is overwritten with its DFT.
///
/// # Errors
///
/// Returns an error, leaving `signal` untouched, if its length is zero or not a power of 2.
pub fn fft_dit<T: FftNum>(signal: &mut [Complex<T>]) -> Result<(), FftError> {
    fft_dit_with_opts(signal, &Options::default())
}

/// FFT -- Decimation in Time, with the given [`Options`]
///
/// # Errors
///
/// Returns an error, leaving `signal` untouched, if its length is zero or not a power of 2,
/// or if [`TwiddleStrategy::Precomputed`] is requested and the table cannot be allocated.
pub fn fft_dit_with_opts<T: FftNum>(
    signal: &mut [Complex<T>],
    opts: &Options,
) -> Result<(), FftError> {
    validate_len(signal.len()).inspect_err(|e| debug!("rejected fft input: {e}"))?;

    debug!(
        "{}-point dit fft, {} stages, {:?} twiddles",
        signal.len(),
        signal.len().ilog2(),
        opts.twiddles
    );

    match opts.twiddles {
        TwiddleStrategy::PerGroup => fft_dit_in_place(signal, StageTwiddles::PerGroup),
        TwiddleStrategy::Precomputed => {
            let planner = Planner::new(signal.len())?;
            fft_dit_in_place(signal, StageTwiddles::Table(&planner.twiddles));
        }
    }

    Ok(())
}

/// FFT -- Decimation in Time, reusing the twiddle factors of a pre-computed [`Planner`]
///
/// # Errors
///
/// Returns an error, leaving `signal` untouched, if `signal` is not of the length the
/// planner was built for.
pub fn fft_dit_with_planner<T: FftNum>(
    signal: &mut [Complex<T>],
    planner: &Planner<T>,
) -> Result<(), FftError> {
    if signal.len() != planner.len() {
        let e = FftError::PlannerMismatch {
            expected: planner.len(),
            actual: signal.len(),
        };
        debug!("rejected fft input: {e}");
        return Err(e);
    }

    debug!(
        "{}-point dit fft, {} stages, planned twiddles",
        signal.len(),
        planner.log_n
    );

    fft_dit_in_place(signal, StageTwiddles::Table(&planner.twiddles));

    Ok(())
}

/// Allocates a zeroed signal of `num_points` samples.
///
/// # Errors
///
/// Returns [`FftError::OutOfMemory`] if the buffer cannot be reserved. The length itself is
/// not checked here, so that callers can hold non-power-of-two data such as DFT references.
pub fn alloc_signal<T: FftNum>(num_points: usize) -> Result<Vec<Complex<T>>, FftError> {
    Ok(try_vec![Complex::new(T::zero(), T::zero()); num_points])
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, assert_signal_closeness, rustfft_forward};

    use super::*;

    #[test]
    fn fft() {
        for k in 0..17 {
            let n = 1 << k;

            let mut signal: Vec<Complex64> = (1..=n)
                .map(|i| Complex64::new(f64::from(i), f64::from(i)))
                .collect();
            let expected = rustfft_forward(&signal);

            fft_dit(&mut signal).unwrap();

            signal
                .iter()
                .zip(expected.iter())
                .for_each(|(z, e)| {
                    assert_float_closeness(z.re, e.re, 0.01);
                    assert_float_closeness(z.im, e.im, 0.01);
                });
        }
    }

    #[test]
    fn all_ones_n4() {
        let mut signal = vec![Complex64::new(1.0, 0.0); 4];
        fft_dit(&mut signal).unwrap();

        let expected = vec![
            Complex64::new(4.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        assert_signal_closeness(&signal, &expected, 1e-12);
    }

    #[test]
    fn one_cycle_cosine_n4() {
        let mut signal = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        fft_dit(&mut signal).unwrap();

        let expected = vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
        ];
        assert_signal_closeness(&signal, &expected, 1e-12);
    }

    #[test]
    fn single_point_is_identity() {
        let mut signal = vec![Complex64::new(-2.5, 7.0)];
        fft_dit(&mut signal).unwrap();
        assert_eq!(signal, vec![Complex64::new(-2.5, 7.0)]);
    }

    #[test]
    fn rejects_non_power_of_two_without_mutation() {
        let original: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 0.0)).collect();

        let mut signal = original.clone();
        assert_eq!(fft_dit(&mut signal), Err(FftError::NonPowerOfTwo(6)));
        assert_eq!(signal, original);

        let mut empty: Vec<Complex64> = vec![];
        assert_eq!(fft_dit(&mut empty), Err(FftError::EmptySignal));
    }

    #[test]
    fn strategies_agree() {
        let signal: Vec<Complex64> = (0..1024)
            .map(|i| Complex64::new((i as f64 * 0.1).sin(), (i as f64 * 0.37).cos()))
            .collect();

        let mut per_group = signal.clone();
        fft_dit(&mut per_group).unwrap();

        let mut opts = Options::default();
        opts.twiddles = TwiddleStrategy::Precomputed;
        let mut precomputed = signal.clone();
        fft_dit_with_opts(&mut precomputed, &opts).unwrap();

        let planner = Planner::new(signal.len()).unwrap();
        let mut planned = signal;
        fft_dit_with_planner(&mut planned, &planner).unwrap();

        assert_signal_closeness(&per_group, &precomputed, 1e-9);
        assert_signal_closeness(&per_group, &planned, 1e-9);
    }

    #[test]
    fn planner_mismatch_is_rejected() {
        let planner = Planner::<f64>::new(8).unwrap();
        let original = vec![Complex64::new(1.0, 1.0); 16];

        let mut signal = original.clone();
        assert_eq!(
            fft_dit_with_planner(&mut signal, &planner),
            Err(FftError::PlannerMismatch {
                expected: 8,
                actual: 16
            })
        );
        assert_eq!(signal, original);
    }

    #[test]
    fn alloc_signal_is_zeroed() {
        let signal = alloc_signal::<f32>(16).unwrap();
        assert_eq!(signal.len(), 16);
        assert!(signal.iter().all(|z| z.re == 0.0 && z.im == 0.0));

        assert_eq!(
            alloc_signal::<f64>(usize::MAX).unwrap_err(),
            FftError::OutOfMemory(usize::MAX)
        );
    }
}
