//! Test signal generators
//!
//! Every generator fills a caller-owned buffer in place, so the same buffer can be handed
//! straight to [`crate::fft_dit`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_complex::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::FftError;
use crate::num::FftNum;

/// Fills `signal` with a real cosine wave of `frequency` Hz sampled at `sample_rate` Hz.
pub fn generate_cosine_wave<T: FftNum>(signal: &mut [Complex<T>], frequency: T, sample_rate: T) {
    let omega = T::TAU() * frequency;

    for (i, z) in signal.iter_mut().enumerate() {
        let t = T::from_index(i) / sample_rate;
        *z = Complex::new((omega * t).cos(), T::zero());
    }
}

/// Fills `signal` with `cos(2π·f1·t)` in the real part and `sin(2π·f2·t)` in the imaginary part.
pub fn generate_complex_signal<T: FftNum>(
    signal: &mut [Complex<T>],
    frequency_re: T,
    frequency_im: T,
    sample_rate: T,
) {
    let omega_re = T::TAU() * frequency_re;
    let omega_im = T::TAU() * frequency_im;

    for (i, z) in signal.iter_mut().enumerate() {
        let t = T::from_index(i) / sample_rate;
        *z = Complex::new((omega_re * t).cos(), (omega_im * t).sin());
    }
}

/// The shapes [`generate_test_signal`] can produce.
///
/// Periodic shapes complete their cycles over the whole buffer, so their spectra land
/// exactly on a bin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignalKind {
    /// One cycle of a cosine
    Cosine,
    /// One cycle of a sine
    Sine,
    /// Harmonics 1, 3 and 5 of a sine with amplitudes 1, 0.5 and 0.25
    MultiSine,
    /// A unit impulse at index 0
    Impulse,
    /// 0 over the first half, 1 over the second
    Step,
    /// One cycle of a ±1 square wave
    Square,
    /// Uniform white noise in `[-1, 1)`
    Noise,
    /// Linear frequency sweep from 0.1 to 5 cycles per buffer
    Chirp,
}

impl SignalKind {
    pub const ALL: [SignalKind; 8] = [
        SignalKind::Cosine,
        SignalKind::Sine,
        SignalKind::MultiSine,
        SignalKind::Impulse,
        SignalKind::Step,
        SignalKind::Square,
        SignalKind::Noise,
        SignalKind::Chirp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Cosine => "cosine",
            SignalKind::Sine => "sine",
            SignalKind::MultiSine => "multi_sine",
            SignalKind::Impulse => "impulse",
            SignalKind::Step => "step",
            SignalKind::Square => "square",
            SignalKind::Noise => "noise",
            SignalKind::Chirp => "chirp",
        }
    }
}

impl Display for SignalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FftError::UnknownSignalKind(s.to_string()))
    }
}

/// Fills the real part of `signal` with a `kind` waveform and zeroes the imaginary part.
///
/// `rng` is only drawn from for [`SignalKind::Noise`].
pub fn generate_test_signal<T: FftNum, R: Rng + ?Sized>(
    kind: SignalKind,
    signal: &mut [Complex<T>],
    rng: &mut R,
) {
    let n = signal.len();
    let size = T::from_index(n);
    let tau = T::TAU();
    let one = T::one();
    let half = one / (one + one);
    let noise = Uniform::new(-1.0_f64, 1.0);

    for (i, z) in signal.iter_mut().enumerate() {
        let x = T::from_index(i);
        // one cycle over the whole buffer
        let phase = tau * x / size;

        let value = match kind {
            SignalKind::Cosine => phase.cos(),
            SignalKind::Sine => phase.sin(),
            SignalKind::MultiSine => {
                let quarter = half * half;
                [(1, one), (3, half), (5, quarter)]
                    .into_iter()
                    .fold(T::zero(), |acc, (harmonic, amplitude)| {
                        acc + amplitude * (phase * T::from_index(harmonic)).sin()
                    })
            }
            SignalKind::Impulse => {
                if i == 0 {
                    one
                } else {
                    T::zero()
                }
            }
            SignalKind::Step => {
                if i < n / 2 {
                    T::zero()
                } else {
                    one
                }
            }
            SignalKind::Square => {
                if phase.sin() >= T::zero() {
                    one
                } else {
                    -one
                }
            }
            SignalKind::Noise => T::from(noise.sample(rng)).unwrap_or_else(T::zero),
            SignalKind::Chirp => {
                let f_start = T::from_index(1) / T::from_index(10);
                let f_end = T::from_index(5);
                let t = x / size;
                let frequency = f_start + (f_end - f_start) * t;
                (tau * frequency * t * size).cos()
            }
        };

        *z = Complex::new(value, T::zero());
    }
}
