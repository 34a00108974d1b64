//! # ppdep-core: Branchless PEXT/PDEP Polyfill
//!
//! `ppdep-core` is a `no_std`, zero-allocation library implementing the BMI2
//! bit gather/scatter instructions in portable arithmetic:
//!
//! - **extract** (PEXT) packs the bits of a word selected by a mask into the
//!   low bits of the result, in mask order;
//! - **deposit** (PDEP) does the inverse, spreading the low bits of a word over
//!   the positions selected by a mask.
//!
//! It targets processors without these instructions, or with a slow microcoded
//! version of them.
//!
//! ## Overview
//!
//! Both operations move every selected bit by the number of *unset* mask bits
//! below it. The library computes that distance for all 64 positions at once
//! (a "parallel-prefix popcount") and stores it as six bit-planes in a
//! [`PrecomputedMasks`]. Plane `i` flags the bits whose distance has bit `i`
//! set, so six masked shifts by 1, 2, 4, 8, 16 and 32 move every bit into place.
//!
//! - Extract runs the shifts smallest first.
//! - Deposit runs them largest first, after trimming its input to the low
//!   `popcount(mask)` bits.
//!
//! Every function is total over the full `u64` domain, including the masks `0`
//! and `u64::MAX`, and runs in input-independent time.
//!
//! ## Quick Start
//!
//! ```
//! use ppdep_core::{build_masks, deposit, deposit_with, extract, extract_with};
//!
//! assert_eq!(extract(0b1111, 0b1010), 0b11);
//! assert_eq!(deposit(0b0011, 0b1010), 0b1010);
//!
//! // Reuse the planes when the same mask is applied many times.
//! let masks = build_masks(0x00FF_00FF_00FF_00FF);
//! let packed = extract_with(0x1234_5678_9ABC_DEF0, &masks);
//! assert_eq!(deposit_with(packed, &masks), 0x1234_5678_9ABC_DEF0 & masks.mask());
//! ```
//!
//! ## Backends
//!
//! The algorithms consume three primitives (prefix XOR, popcount and "zero high
//! bits"), each with a software and a hardware strategy. The crate-level
//! functions use [`Native`], configured at build time by the `clmul`, `popcnt`
//! and `bzhi` features. The `*_using` functions take any [`Backend`]
//! explicitly, e.g. [`Portable`] for the pure software path.
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - Popcount, prefix XOR and zero-high primitives
//! - [`backend`] - Strategy traits and compile-time backend selection
//! - [`ppp`] - Parallel-prefix popcount mask builder
//! - [`extract`] - PEXT from precomputed masks
//! - [`deposit`] - PDEP from precomputed masks
//! - [`reference`] - Bit-serial reference implementations for testing

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Strategy traits and build-time backend selection.
pub mod backend;

/// PDEP from precomputed masks.
pub mod deposit;

/// PEXT from precomputed masks.
pub mod extract;

/// Popcount, prefix XOR and zero-high-bits primitives.
pub mod intrinsics;

/// Parallel-prefix popcount mask builder.
pub mod ppp;

/// Bit-serial reference PEXT/PDEP.
pub mod reference;

/// Kani formal verification proofs for extract/deposit.
#[cfg(kani)]
mod ppp_kani;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Backends
pub use backend::{Backend, Custom, Hard, Native, Portable, Soft};

// Mask planes
pub use ppp::{build_masks_using, PrecomputedMasks};

// Extract / deposit with an explicit backend
pub use deposit::{deposit_using, deposit_with_using, DepositMasks};
pub use extract::{extract_using, extract_with};

// Reference implementations
pub use reference::{pdep_reference, pext_reference};

// =============================================================================
// Native Entry Points
// =============================================================================

/// Build the parallel-prefix-popcount planes for `mask`.
///
/// The result can be cached and shared between any number of
/// [`extract_with`] and [`deposit_with`] calls using the same mask.
#[inline(always)]
pub fn build_masks(mask: u64) -> PrecomputedMasks {
    build_masks_using::<Native>(mask)
}

/// PEXT: pack the bits of `a` selected by `mask` into the low bits.
#[inline(always)]
pub fn extract(a: u64, mask: u64) -> u64 {
    extract_using::<Native>(a, mask)
}

/// PDEP: spread the low bits of `a` over the positions selected by `mask`.
#[inline(always)]
pub fn deposit(a: u64, mask: u64) -> u64 {
    deposit_using::<Native>(a, mask)
}

/// PDEP with planes from [`build_masks`].
#[inline(always)]
pub fn deposit_with(a: u64, masks: &PrecomputedMasks) -> u64 {
    deposit_with_using::<Native>(a, masks)
}

impl From<u64> for PrecomputedMasks {
    fn from(mask: u64) -> Self {
        build_masks(mask)
    }
}
