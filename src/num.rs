//! Scalar types the transform is generic over

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// A floating point type usable as the component type of a [`crate::Complex`] sample.
///
/// Implemented for `f32` and `f64`. `f64` is the reference precision.
pub trait FftNum: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// Converts an index or a length into `Self`
    fn from_index(i: usize) -> Self;
}

macro_rules! impl_fft_num_for {
    ($precision:ident) => {
        impl FftNum for $precision {
            #[inline]
            fn from_index(i: usize) -> Self {
                i as $precision
            }
        }
    };
}

impl_fft_num_for!(f64);
impl_fft_num_for!(f32);
