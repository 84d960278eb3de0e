use std::error::Error;
use std::fmt::Formatter;

/// Errors reported before a transform (or an allocation) is started.
///
/// Whenever one of these is returned, the caller's buffer has not been touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FftError {
    /// The signal has no samples
    EmptySignal,
    /// The signal length is not a power of two
    NonPowerOfTwo(usize),
    /// A buffer of the given number of samples could not be allocated
    OutOfMemory(usize),
    /// A [`crate::planner::Planner`] was used on a signal of a different length
    PlannerMismatch { expected: usize, actual: usize },
    /// A signal kind name could not be parsed
    UnknownSignalKind(String),
    /// A twiddle strategy name could not be parsed
    UnknownTwiddleStrategy(String),
}

impl Error for FftError {}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::EmptySignal => f.write_str("Cannot execute FFT on an empty signal"),
            FftError::NonPowerOfTwo(len) => f.write_fmt(format_args!(
                "Signal length must be a power of two, but it was {len}"
            )),
            FftError::OutOfMemory(len) => {
                f.write_fmt(format_args!("Cannot allocate {len} samples to vector"))
            }
            FftError::PlannerMismatch { expected, actual } => f.write_fmt(format_args!(
                "Planner was built for {expected} points, but the signal has {actual}"
            )),
            FftError::UnknownSignalKind(name) => {
                f.write_fmt(format_args!("Unknown signal type: {name}"))
            }
            FftError::UnknownTwiddleStrategy(name) => f.write_fmt(format_args!(
                "Unknown twiddle strategy: {name}, expected per-group or precomputed"
            )),
        }
    }
}

/// Checks that `len` is a strictly positive power of two.
pub(crate) fn validate_len(len: usize) -> Result<(), FftError> {
    if len == 0 {
        Err(FftError::EmptySignal)
    } else if !len.is_power_of_two() {
        Err(FftError::NonPowerOfTwo(len))
    } else {
        Ok(())
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::error::FftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
