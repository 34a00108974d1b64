//! Randomized compare harness: ppdep-core vs hardware PEXT/PDEP
//!
//! Draws masks of varying sparsity and random inputs, runs extract and deposit
//! through the selected backends, and compares every result bit-for-bit with
//! the BMI2 instructions (or the bit-serial reference on CPUs without BMI2).
//! The first disagreement is reported as hex and the process exits non-zero.
//!
//! # Usage
//!
//! ```bash
//! # Default run: 2^20 rounds, JSF64 with the classic seed, native backend
//! cargo run --release -p ppdep-fuzz
//!
//! # Every strategy combination, hardware paths compiled in
//! RUSTFLAGS="-C target-cpu=native" cargo run --release -p ppdep-fuzz -- --backend all
//!
//! # Progress logging
//! RUST_LOG=debug cargo run --release -p ppdep-fuzz -- --iterations 100000
//! ```

mod masks;
mod rng;
mod stats;
mod verification;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use ppdep_core::{Native, Portable};

use crate::masks::{fill_inputs, mask_family, MASK_CLASSES};
use crate::rng::{Jsf64, DEFAULT_SEED};
use crate::stats::{format_number, Throughput};
use crate::verification::{all_backends, entry, BackendCheck, Reference};

#[derive(Parser, Debug)]
#[command(name = "ppdep-fuzz")]
#[command(about = "Compare ppdep-core extract/deposit against hardware PEXT/PDEP")]
struct Args {
    /// Number of mask rounds (each round tests four masks)
    #[arg(long, default_value_t = 1 << 20)]
    iterations: usize,

    /// Random inputs per mask
    #[arg(long, default_value_t = 32)]
    inputs_per_mask: usize,

    /// Random seed (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_seed, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Random number generator
    #[arg(long, value_enum, default_value_t = RngKind::Jsf)]
    rng: RngKind,

    /// Backends to test
    #[arg(long, value_enum, default_value_t = BackendArg::Native)]
    backend: BackendArg,

    /// Source of expected results
    #[arg(long, value_enum, default_value_t = ReferenceArg::Auto)]
    reference: ReferenceArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RngKind {
    /// Bob Jenkins' small PRNG, as the classic ZP7 driver
    Jsf,
    /// xoshiro256++
    Xoshiro,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    /// Backend selected by the crate features
    Native,
    /// Software fallbacks only
    Portable,
    /// All eight strategy combinations
    All,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReferenceArg {
    /// BMI2 when the CPU has it, bit-serial loops otherwise
    Auto,
    /// Require BMI2
    Bmi2,
    /// Bit-serial loops
    Serial,
}

fn parse_seed(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid seed {s:?}: {e}"))
}

fn select_reference(arg: ReferenceArg) -> Result<Reference> {
    match arg {
        ReferenceArg::Auto => Ok(Reference::detect()),
        ReferenceArg::Bmi2 => Reference::hardware().context("this CPU does not support BMI2"),
        ReferenceArg::Serial => Ok(Reference::Serial),
    }
}

fn select_backends(arg: BackendArg) -> Vec<BackendCheck> {
    match arg {
        BackendArg::Native => vec![entry::<Native>()],
        BackendArg::Portable => vec![entry::<Portable>()],
        BackendArg::All => all_backends(),
    }
}

fn make_rng(kind: RngKind, seed: u64) -> Box<dyn RngCore> {
    match kind {
        RngKind::Jsf => Box::new(Jsf64::seed_from_u64(seed)),
        RngKind::Xoshiro => Box::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let reference = select_reference(args.reference)?;
    let checks = select_backends(args.backend);
    let mut rng = make_rng(args.rng, args.seed);

    info!("reference: {reference}");
    info!("rng: {:?}, seed {:#018x}", args.rng, args.seed);
    for check in &checks {
        info!("backend: {} (* = hardware instruction)", check.label);
    }

    let progress_every = (args.iterations / 16).max(1);
    let mut inputs = vec![0u64; args.inputs_per_mask];
    let mut tests = 0usize;
    let t0 = Instant::now();

    for round in 0..args.iterations {
        let family = mask_family(rng.as_mut());

        for (class, mask) in MASK_CLASSES.iter().zip(family) {
            fill_inputs(rng.as_mut(), &mut inputs);

            for check in &checks {
                match (check.run)(mask, &inputs, reference) {
                    Ok(n) => tests += n,
                    Err(mismatch) => {
                        error!("{class} mask failed after {} tests", format_number(tests));
                        return Err(mismatch.into());
                    }
                }
            }
        }

        if round % progress_every == 0 {
            debug!(
                "round {}/{}: {} tests",
                format_number(round),
                format_number(args.iterations),
                format_number(tests)
            );
        }
    }

    let throughput = Throughput {
        tests,
        elapsed: t0.elapsed(),
    };

    println!("Passed {tests} tests.");
    println!("{throughput}");

    Ok(())
}
