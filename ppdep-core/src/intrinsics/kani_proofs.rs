//! Kani formal verification proofs for the intrinsics module.
//!
//! Each portable primitive is checked against the obvious definition over the
//! full 64-bit input space.
//!
//! Run with: `cargo kani --package ppdep-core`

use super::bits::{blsr, popcount_swar, prefix_xor_cascade, zero_high_portable};

// ============================================================================
// Proof 1: SWAR popcount matches count_ones
// ============================================================================
// File: bits.rs (popcount_swar)
// What: Prove the field-summing reduction counts every bit exactly once
// Why: Deposit trims its input to this many bits

/// Verify popcount_swar agrees with the compiler's count_ones.
#[kani::proof]
fn verify_popcount_swar() {
    let x: u64 = kani::any();
    kani::assert(
        popcount_swar(x) == x.count_ones(),
        "SWAR popcount must match count_ones",
    );
}

// ============================================================================
// Proof 2: prefix XOR cascade computes running parity
// ============================================================================
// File: bits.rs (prefix_xor_cascade)
// What: Prove bit j of the result is the parity of bits 0..=j
// Why: Every plane of the mask builder is one exclusive prefix XOR

/// Verify prefix_xor_cascade bit-by-bit for one symbolic position.
#[kani::proof]
fn verify_prefix_xor_cascade_parity() {
    let x: u64 = kani::any();
    let j: u32 = kani::any();
    kani::assume(j < 64);

    let below_and_at = if j == 63 { x } else { x & ((1u64 << (j + 1)) - 1) };
    let expected = (below_and_at.count_ones() & 1) as u64;

    kani::assert(
        (prefix_xor_cascade(x) >> j) & 1 == expected,
        "prefix XOR bit must be running parity",
    );
}

// ============================================================================
// Proof 3: zero_high_portable handles index 64
// ============================================================================
// File: bits.rs (zero_high_portable)
// What: Prove the result equals x with bits >= index cleared, for 0..=64
// Why: The naive (1 << 64) - 1 mask collapses to zero

/// Verify zero_high_portable over the whole valid index range.
#[kani::proof]
fn verify_zero_high_portable() {
    let x: u64 = kani::any();
    let index: u32 = kani::any();
    kani::assume(index <= 64);

    let expected = if index == 64 { x } else { x & ((1u64 << index) - 1) };

    kani::assert(
        zero_high_portable(x, index) == expected,
        "zero_high must keep exactly the low index bits",
    );
}

// ============================================================================
// Proof 4: blsr iteration visits every set bit
// ============================================================================
// File: reference.rs uses this pattern
// What: Prove the loop terminates within 64 steps and covers all bits
// Why: The bit-serial reference implementations are built on it

/// Verify that the blsr iteration pattern processes all bits.
#[kani::proof]
#[kani::unwind(65)]
fn verify_bit_iteration_terminates() {
    let original: u64 = kani::any();
    let mut mask = original;
    let mut count = 0u32;
    let mut processed = 0u64;

    while mask != 0 {
        processed |= mask & mask.wrapping_neg();
        mask = blsr(mask);

        count += 1;
        kani::assert(count <= 64, "must terminate within 64 iterations");
    }

    kani::assert(processed == original, "all bits must be processed");
}
