//! Generates every test signal kind, prints its statistics, and checks the FFT of each
//! against a direct DFT.
//!
//! Usage: `cargo run --example signal_survey -- [n] [kind]`
use std::env;
use std::error::Error;
use std::str::FromStr;

use ditfft::analysis::{naive_dft, AccuracyReport};
use ditfft::report::{SignalStats, SpectrumReport};
use ditfft::signal::{generate_test_signal, SignalKind};
use ditfft::{alloc_signal, fft_dit_with_opts, Options};
use log::info;

fn survey(kind: SignalKind, n: usize, opts: &Options) -> Result<bool, Box<dyn Error>> {
    let mut signal = alloc_signal::<f64>(n)?;
    generate_test_signal(kind, &mut signal, &mut rand::thread_rng());

    println!("Signal type: {kind}");
    if let Some(stats) = SignalStats::from_signal(&signal) {
        println!("{stats}");
    }
    print!("{}", SpectrumReport::new("First 8 samples", &signal).first(8));

    let reference = naive_dft(&signal)?;
    fft_dit_with_opts(&mut signal, opts)?;

    let passed = match AccuracyReport::compare(&signal, &reference) {
        Some(report) => {
            print!("{report}");
            report.passes_default()
        }
        None => false,
    };

    if passed {
        println!("FFT matches the direct DFT");
    } else {
        println!("FFT differs from the direct DFT");
    }
    println!("{}", "-".repeat(50));

    Ok(passed)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let n = match args.get(1) {
        Some(arg) => usize::from_str(arg)?,
        None => 64,
    };
    let kinds = match args.get(2) {
        Some(arg) => vec![SignalKind::from_str(arg)?],
        None => SignalKind::ALL.to_vec(),
    };

    let opts = Options::guess_options(n);
    info!("surveying {} signal kinds at n = {n}", kinds.len());

    let mut failures = 0;
    for kind in kinds {
        if !survey(kind, n, &opts)? {
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} signal kinds failed the accuracy check").into());
    }
    Ok(())
}
