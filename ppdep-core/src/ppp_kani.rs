//! Kani formal verification proofs for the mask builder, extract and deposit.
//!
//! These proofs run over fully symbolic masks and inputs, so they cover the
//! degenerate masks `0` and `u64::MAX` along with everything in between.
//!
//! Run with: `cargo kani --package ppdep-core`

use crate::backend::Portable;
use crate::deposit::deposit_with_using;
use crate::extract::extract_with;
use crate::ppp::build_masks_using;
use crate::reference::{pdep_reference, pext_reference};

// ============================================================================
// Proof 1: planes encode the unset-bits-below count
// ============================================================================
// File: ppp.rs (build_masks_using)
// What: Prove the six planes decode to popcount(!mask & below(j)) at bit j
// Why: Every shift in extract and deposit is driven by this count

/// Verify the plane encoding at one symbolic bit position.
#[kani::proof]
#[kani::unwind(7)]
fn verify_planes_count_unset_below() {
    let mask: u64 = kani::any();
    let j: u32 = kani::any();
    kani::assume(j < 64);

    let masks = build_masks_using::<Portable>(mask);
    let below = (1u64 << j) - 1;
    let expected = (!mask & below).count_ones();

    kani::assert(
        masks.shift_distance(j) == expected,
        "plane bits must spell the unset-below count",
    );
}

// ============================================================================
// Proof 2: extract matches bit-serial PEXT
// ============================================================================
// File: extract.rs
// What: Prove extract_with equals the one-bit-at-a-time definition
// Why: The ascending shift order must not let bits clobber each other

/// Verify extract against the reference loop.
#[kani::proof]
#[kani::unwind(65)]
fn verify_extract_matches_reference() {
    let a: u64 = kani::any();
    let mask: u64 = kani::any();

    let masks = build_masks_using::<Portable>(mask);

    kani::assert(
        extract_with(a, &masks) == pext_reference(a, mask),
        "extract must equal PEXT",
    );
}

// ============================================================================
// Proof 3: deposit matches bit-serial PDEP
// ============================================================================
// File: deposit.rs
// What: Prove deposit_with equals the one-bit-at-a-time definition
// Why: Covers the popcount == 64 trimming case and the add-as-or merge

/// Verify deposit against the reference loop.
#[kani::proof]
#[kani::unwind(65)]
fn verify_deposit_matches_reference() {
    let a: u64 = kani::any();
    let mask: u64 = kani::any();

    let masks = build_masks_using::<Portable>(mask);

    kani::assert(
        deposit_with_using::<Portable>(a, &masks) == pdep_reference(a, mask),
        "deposit must equal PDEP",
    );
}

// ============================================================================
// Proof 4: deposit then extract keeps the low popcount bits
// ============================================================================
// File: extract.rs, deposit.rs
// What: Prove extract(deposit(a)) == a trimmed to popcount(mask) bits
// Why: The two operations are inverses on their respective domains

/// Verify the low-bits round trip.
#[kani::proof]
#[kani::unwind(7)]
fn verify_deposit_extract_roundtrip() {
    let a: u64 = kani::any();
    let mask: u64 = kani::any();

    let masks = build_masks_using::<Portable>(mask);
    let count = mask.count_ones();
    let expected = if count == 64 { a } else { a & ((1u64 << count) - 1) };

    kani::assert(
        extract_with(deposit_with_using::<Portable>(a, &masks), &masks) == expected,
        "extract after deposit must keep the low bits",
    );
}
