//! Transforms a real cosine wave and a complex two-tone signal, printing the first rows of each.
//!
//! Usage: `cargo run --example fft_demo -- [n] [frequency] [sample_rate]`
//!
//! Set `RUST_LOG=debug` to see the transform's log output and `DITFFT_TWIDDLES=precomputed`
//! to switch twiddle strategies.
use std::env;
use std::error::Error;

use ditfft::report::SpectrumReport;
use ditfft::signal::{generate_complex_signal, generate_cosine_wave};
use ditfft::{alloc_signal, fft_dit_with_opts, Complex64, FftError, Options};

const ROWS: usize = 10;

fn arg_or<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> Result<T, String> {
    match args.get(idx) {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("invalid argument {idx}: {arg:?}")),
        None => Ok(default),
    }
}

fn transform_and_print(signal: &mut [Complex64], opts: &Options) -> Result<(), FftError> {
    print!("{}", SpectrumReport::new("First 10 samples of the input signal", signal).first(ROWS));

    println!("Computing FFT...");
    fft_dit_with_opts(signal, opts)?;

    print!(
        "{}",
        SpectrumReport::new("First 10 samples of the FFT result", signal)
            .first(ROWS)
            .with_magnitude()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let n: usize = arg_or(&args, 1, 1024)?;
    let frequency: f64 = arg_or(&args, 2, 100.0)?;
    let sample_rate: f64 = arg_or(&args, 3, 1024.0)?;

    if !n.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo(n).into());
    }

    let opts = Options::from_env();
    let mut signal = alloc_signal::<f64>(n)?;

    println!("TEST 1: REAL COSINE WAVE");
    println!("Generating a {n}-point cosine wave with frequency {frequency:.1} Hz");
    generate_cosine_wave(&mut signal, frequency, sample_rate);
    transform_and_print(&mut signal, &opts)?;

    println!("\nTEST 2: COMPLEX SIGNAL");
    println!("Generating a {n}-point complex signal");
    generate_complex_signal(&mut signal, frequency, frequency / 2.0, sample_rate);
    transform_and_print(&mut signal, &opts)?;

    Ok(())
}
