pub extern crate rustfft;

// export rustfft to ditfft
use num_complex::Complex;
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;
use rustfft::{FftNum, FftPlanner};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex signals are element-wise approximately equal.
///
/// # Panics
///
/// Panics if the lengths differ or any pair of components is too far apart
#[track_caller]
pub fn assert_signal_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "signal lengths differ");

    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_float_closeness(a.re, e.re, epsilon);
        assert_float_closeness(a.im, e.im, epsilon);
    }
}

/// Generate a random, complex, signal in the provided buffer
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

/// Computes the forward FFT of `signal` with rustfft, for use as a reference
pub fn rustfft_forward<T: FftNum>(signal: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut buffer = signal.to_vec();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}
