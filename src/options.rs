use std::str::FromStr;

use log::warn;

use crate::error::FftError;

/// Environment variable read by [`Options::from_env`]
pub const TWIDDLES_ENV_VAR: &str = "DITFFT_TWIDDLES";

/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will use the defaults.
///
/// No option changes the result beyond floating point rounding.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub twiddles: TwiddleStrategy,
}

impl Options {
    /// Picks reasonable options for a signal of `input_size` points.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        let n: usize = input_size.max(1).ilog2() as usize;
        if n < 10 {
            options.twiddles = TwiddleStrategy::PerGroup;
        } else {
            options.twiddles = TwiddleStrategy::Precomputed;
        }
        options
    }

    /// Reads the options from the environment, falling back to the defaults.
    ///
    /// `DITFFT_TWIDDLES` may be set to `per-group` or `precomputed`.
    pub fn from_env() -> Options {
        let mut options = Options::default();
        if let Ok(value) = std::env::var(TWIDDLES_ENV_VAR) {
            match value.parse() {
                Ok(twiddles) => options.twiddles = twiddles,
                Err(e) => warn!("ignoring {TWIDDLES_ENV_VAR}: {e}"),
            }
        }
        options
    }
}

/// Where the butterflies get their twiddle factors from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleStrategy {
    #[default]
    /// Recompute `e^(-2πi·k/M)` for every group of every stage.
    /// No allocation at all.
    PerGroup,
    /// Build a table of `N / 2` roots of unity once per call and index into it.
    /// Trades one allocation for fewer trigonometric evaluations.
    Precomputed,
}

impl FromStr for TwiddleStrategy {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-group" | "per_group" | "pergroup" => Ok(TwiddleStrategy::PerGroup),
            "precomputed" | "table" => Ok(TwiddleStrategy::Precomputed),
            _ => Err(FftError::UnknownTwiddleStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_per_group() {
        assert_eq!(Options::default().twiddles, TwiddleStrategy::PerGroup);
    }

    #[test]
    fn guess_switches_to_table_for_large_inputs() {
        assert_eq!(
            Options::guess_options(1 << 9).twiddles,
            TwiddleStrategy::PerGroup
        );
        assert_eq!(
            Options::guess_options(1 << 10).twiddles,
            TwiddleStrategy::Precomputed
        );
        assert_eq!(Options::guess_options(0).twiddles, TwiddleStrategy::PerGroup);
    }

    #[test]
    fn parse_strategy() {
        assert_eq!("per-group".parse(), Ok(TwiddleStrategy::PerGroup));
        assert_eq!(" Precomputed ".parse(), Ok(TwiddleStrategy::Precomputed));
        assert_eq!(
            "cached".parse::<TwiddleStrategy>(),
            Err(FftError::UnknownTwiddleStrategy("cached".to_string()))
        );
    }
}
