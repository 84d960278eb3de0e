use ditfft::signal::{generate_test_signal, SignalKind};
use ditfft::{bit_reverse_permutation, fft_dit, fft_dit_with_opts, Complex64, FftError, Options};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use utilities::{assert_float_closeness, assert_signal_closeness};

fn random_signal(rng: &mut StdRng, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn transform(signal: &[Complex64]) -> Vec<Complex64> {
    let mut spectrum = signal.to_vec();
    fft_dit(&mut spectrum).unwrap();
    spectrum
}

#[test]
fn linearity() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for k in 0..12 {
        let n = 1 << k;
        let a = random_signal(&mut rng, n);
        let b = random_signal(&mut rng, n);
        let c = Complex64::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

        let combined: Vec<Complex64> = a.iter().zip(b.iter()).map(|(x, y)| x + c * y).collect();

        let lhs = transform(&combined);
        let rhs: Vec<Complex64> = transform(&a)
            .iter()
            .zip(transform(&b).iter())
            .map(|(x, y)| x + c * y)
            .collect();

        assert_signal_closeness(&lhs, &rhs, 1e-9);
    }
}

#[test]
fn parseval() {
    let mut rng = StdRng::seed_from_u64(42);

    for k in 0..14 {
        let n = 1 << k;
        let signal = random_signal(&mut rng, n);

        let time_energy: f64 = signal.iter().map(|z| z.norm_sqr()).sum();
        let freq_energy: f64 =
            transform(&signal).iter().map(|z| z.norm_sqr()).sum::<f64>() / n as f64;

        assert_float_closeness(freq_energy / time_energy, 1.0, 1e-9);
    }
}

#[test]
fn dc_component() {
    for k in 0..12 {
        let n = 1 << k;
        let value = 2.5;
        let spectrum = transform(&vec![Complex64::new(value, 0.0); n]);

        assert_float_closeness(spectrum[0].re, n as f64 * value, 1e-9);
        assert_float_closeness(spectrum[0].im, 0.0, 1e-9);
        for z in &spectrum[1..] {
            assert_float_closeness(z.norm(), 0.0, 1e-9);
        }
    }
}

#[test]
fn impulse_response() {
    for k in 0..12 {
        let n = 1 << k;
        let mut signal = vec![Complex64::new(0.0, 0.0); n];
        let mut rng = StdRng::seed_from_u64(1);
        generate_test_signal(SignalKind::Impulse, &mut signal, &mut rng);

        let spectrum = transform(&signal);
        assert_signal_closeness(&spectrum, &vec![Complex64::new(1.0, 0.0); n], 1e-12);
    }
}

#[test]
fn permutation_is_self_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for k in 0..12 {
        let original = random_signal(&mut rng, 1 << k);
        let mut signal = original.clone();
        bit_reverse_permutation(&mut signal);
        bit_reverse_permutation(&mut signal);
        assert_eq!(signal, original);
    }
}

#[test]
fn known_small_cases() {
    let ones = transform(&[Complex64::new(1.0, 0.0); 4]);
    assert_signal_closeness(
        &ones,
        &[
            Complex64::new(4.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ],
        1e-12,
    );

    let cosine = transform(&[
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, 0.0),
    ]);
    assert_signal_closeness(
        &cosine,
        &[
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
        ],
        1e-12,
    );
}

#[test]
fn precondition_rejection() {
    let original: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, -(i as f64))).collect();
    let mut signal = original.clone();

    assert_eq!(fft_dit(&mut signal), Err(FftError::NonPowerOfTwo(6)));
    assert_eq!(signal, original);

    assert_eq!(
        fft_dit_with_opts(&mut signal, &Options::guess_options(6)),
        Err(FftError::NonPowerOfTwo(6))
    );
    assert_eq!(signal, original);
}
