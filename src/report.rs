//! Human-readable rendering of signals and spectra
use std::fmt::{Display, Formatter};

use num_complex::Complex;

use crate::num::FftNum;

/// Renders a labelled listing of complex samples, one `[i] re + imi` row per sample.
///
/// ```
/// use ditfft::report::SpectrumReport;
/// use ditfft::Complex64;
///
/// let samples = [Complex64::new(1.0, -0.5)];
/// let report = SpectrumReport::new("Input", &samples).with_magnitude();
/// assert_eq!(
///     report.to_string(),
///     "Input:\n[0] 1.0000 + -0.5000i (magnitude: 1.1180)\n"
/// );
/// ```
pub struct SpectrumReport<'a, T> {
    label: &'a str,
    samples: &'a [Complex<T>],
    limit: Option<usize>,
    magnitude: bool,
    phase: bool,
}

impl<'a, T: FftNum> SpectrumReport<'a, T> {
    pub fn new(label: &'a str, samples: &'a [Complex<T>]) -> Self {
        Self {
            label,
            samples,
            limit: None,
            magnitude: false,
            phase: false,
        }
    }

    /// Only print the first `rows` samples
    pub fn first(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn with_magnitude(mut self) -> Self {
        self.magnitude = true;
        self
    }

    /// Appends the phase in degrees
    pub fn with_phase(mut self) -> Self {
        self.phase = true;
        self
    }
}

impl<T: FftNum> Display for SpectrumReport<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.label)?;

        let rows = self.limit.unwrap_or(self.samples.len());
        for (i, z) in self.samples.iter().take(rows).enumerate() {
            write!(f, "[{i}] {:.4} + {:.4}i", z.re, z.im)?;
            if self.magnitude {
                write!(f, " (magnitude: {:.4})", z.norm())?;
            }
            if self.phase {
                write!(f, " (phase: {:.2}°)", z.arg().to_degrees())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summary statistics of the real part of a signal
#[derive(Debug, Clone, PartialEq)]
pub struct SignalStats<T> {
    pub len: usize,
    pub min: T,
    pub max: T,
    pub mean: T,
}

impl<T: FftNum> SignalStats<T> {
    /// Returns `None` for an empty signal
    pub fn from_signal(signal: &[Complex<T>]) -> Option<Self> {
        let first = signal.first()?.re;

        let (min, max, sum) = signal.iter().fold(
            (first, first, T::zero()),
            |(min, max, sum), z| (min.min(z.re), max.max(z.re), sum + z.re),
        );

        Some(Self {
            len: signal.len(),
            min,
            max,
            mean: sum / T::from_index(signal.len()),
        })
    }
}

impl<T: FftNum> Display for SignalStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Length: {}", self.len)?;
        writeln!(f, "Min value: {:.4}", self.min)?;
        writeln!(f, "Max value: {:.4}", self.max)?;
        writeln!(f, "Mean value: {:.4}", self.mean)
    }
}
