//! # Tutorial: How the Parallel-Prefix Popcount Moves Bits
//!
//! This example walks through one extract and one deposit for a small mask,
//! printing the six planes and the word after every shift stage.
//!
//! ## What You'll Learn
//!
//! 1. **Shift distances**: Each selected bit moves by the number of unset mask
//!    bits below it
//! 2. **Planes**: The distances are stored as six bit-planes, one per bit of a
//!    6-bit count
//! 3. **Stage order**: Extract shifts by 1, 2, 4, ... while deposit runs the
//!    same stages from 32 down
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_planes
//! ```

use ppdep_core::{build_masks, deposit_with, extract_with, DepositMasks, PrecomputedMasks};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Select bits 3, 4, 9, 12 and 13.
const MASK: u64 = 0b0011_0010_0001_1000;
/// Input word for the walkthrough.
const INPUT: u64 = 0b0010_0010_0000_1000;
/// Bits shown in the printed rows.
const WIDTH: usize = 16;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn row(label: &str, x: u64) {
    println!("{label:>12}  {:0width$b}", x & ((1 << WIDTH) - 1), width = WIDTH);
}

/// Extract with every intermediate value printed.
fn trace_extract(a: u64, masks: &PrecomputedMasks) -> u64 {
    let mut a = a & masks.mask();
    row("masked", a);
    for (i, &bit) in masks.planes().iter().enumerate() {
        a = (a & !bit) | ((a & bit) >> (1 << i));
        row(&format!("shift {:>2}", 1 << i), a);
    }
    a
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    let masks = build_masks(MASK);

    println!("=== Planes ===");
    row("mask", masks.mask());
    for (i, &plane) in masks.planes().iter().enumerate() {
        row(&format!("plane {i}"), plane);
    }

    println!();
    println!("=== Shift distance per selected bit ===");
    for bit in 0..WIDTH as u32 {
        if (MASK >> bit) & 1 == 1 {
            println!("bit {bit:>2} -> moves right by {}", masks.shift_distance(bit));
        }
    }

    println!();
    println!("=== Extract ===");
    row("input", INPUT);
    let packed = trace_extract(INPUT, &masks);
    assert_eq!(packed, extract_with(INPUT, &masks));
    row("result", packed);

    println!();
    println!("=== Deposit ===");
    let cached = DepositMasks::new(masks);
    let spread = deposit_with(packed, &masks);
    assert_eq!(spread, cached.deposit(packed));
    assert_eq!(spread, INPUT & MASK);
    row("keep", cached.keep());
    row("result", spread);
}
