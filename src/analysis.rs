//! Accuracy checks against a reference spectrum
//!
//! [`naive_dft`] evaluates the DFT sum directly, which makes it a slow but obviously correct
//! reference for [`crate::fft_dit`]. [`AccuracyReport`] summarizes how far two spectra are apart.
use std::fmt::{Display, Formatter};

use num_complex::Complex;

use crate::error::{try_vec, FftError};
use crate::num::FftNum;
use crate::twiddles::twiddle;

/// Default magnitude error threshold used by [`AccuracyReport::passes_default`]
pub const MAGNITUDE_THRESHOLD: f64 = 1e-3;
/// Default phase error threshold in degrees used by [`AccuracyReport::passes_default`]
pub const PHASE_THRESHOLD_DEG: f64 = 5.0;

/// O(N²) DFT of `input`, for any non-zero length.
///
/// # Errors
///
/// Returns an error if `input` is empty or the output cannot be allocated.
pub fn naive_dft<T: FftNum>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::EmptySignal);
    }

    let mut output = try_vec![Complex::new(T::zero(), T::zero()); n];

    for (k, out) in output.iter_mut().enumerate() {
        *out = input
            .iter()
            .enumerate()
            .fold(Complex::new(T::zero(), T::zero()), |acc, (i, x)| {
                // reduce k·i mod N so the angle stays within one turn
                acc + *x * twiddle::<T>((k * i) % n, n)
            });
    }

    Ok(output)
}

/// Magnitude and phase errors of a spectrum relative to a reference
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport<T> {
    pub max_magnitude_error: T,
    pub avg_magnitude_error: T,
    /// In degrees
    pub max_phase_error: T,
    /// In degrees
    pub avg_phase_error: T,
}

impl<T: FftNum> AccuracyReport<T> {
    /// Compares `actual` against `reference` bin by bin.
    ///
    /// Phase errors wrap around, so they fall in `[0°, 180°]`. Bins whose reference magnitude is
    /// rounding noise relative to the largest bin have no meaningful phase and count as a
    /// zero phase error. NaN errors count as infinite. Only the common prefix of the two spectra is compared. Returns `None`
    /// if there is nothing to compare.
    pub fn compare(actual: &[Complex<T>], reference: &[Complex<T>]) -> Option<Self> {
        let bins = actual.len().min(reference.len());
        if bins == 0 {
            return None;
        }

        let pi = T::PI();
        let peak = reference[..bins]
            .iter()
            .fold(T::zero(), |peak, r| peak.max(r.norm()));
        let noise_floor = peak * T::epsilon().sqrt();

        let (max_mag, sum_mag, max_phase, sum_phase) = actual
            .iter()
            .zip(reference.iter())
            .map(|(a, r)| {
                let mag_error = nan_as_infinite((a.norm() - r.norm()).abs());
                if r.norm() <= noise_floor {
                    return (mag_error, T::zero());
                }

                let mut phase_error = (a.arg() - r.arg()).abs();
                if phase_error > pi {
                    phase_error = pi + pi - phase_error;
                }
                (mag_error, nan_as_infinite(phase_error.to_degrees()))
            })
            .fold(
                (T::zero(), T::zero(), T::zero(), T::zero()),
                |(max_mag, sum_mag, max_phase, sum_phase), (mag, phase)| {
                    (
                        max_mag.max(mag),
                        sum_mag + mag,
                        max_phase.max(phase),
                        sum_phase + phase,
                    )
                },
            );

        let count = T::from_index(bins);
        Some(Self {
            max_magnitude_error: max_mag,
            avg_magnitude_error: sum_mag / count,
            max_phase_error: max_phase,
            avg_phase_error: sum_phase / count,
        })
    }

    /// Whether both maximum errors are below the given thresholds
    pub fn passes(&self, magnitude_threshold: T, phase_threshold_deg: T) -> bool {
        self.max_magnitude_error < magnitude_threshold && self.max_phase_error < phase_threshold_deg
    }

    /// [`Self::passes`] with [`MAGNITUDE_THRESHOLD`] and [`PHASE_THRESHOLD_DEG`]
    pub fn passes_default(&self) -> bool {
        let magnitude = T::from(MAGNITUDE_THRESHOLD).unwrap_or_else(T::zero);
        let phase = T::from(PHASE_THRESHOLD_DEG).unwrap_or_else(T::zero);
        self.passes(magnitude, phase)
    }
}

// `Float::max` drops NaN operands, which would hide a broken bin
fn nan_as_infinite<T: FftNum>(error: T) -> T {
    if error.is_nan() {
        T::infinity()
    } else {
        error
    }
}

impl<T: FftNum> Display for AccuracyReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Maximum magnitude error: {:.6}", self.max_magnitude_error)?;
        writeln!(f, "Average magnitude error: {:.6}", self.avg_magnitude_error)?;
        writeln!(f, "Maximum phase error: {:.2}°", self.max_phase_error)?;
        writeln!(f, "Average phase error: {:.2}°", self.avg_phase_error)
    }
}
