// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Population count, prefix XOR and zero-high-bits primitives, in portable and
// hardware-backed forms. The `backend` module wraps these as strategies.

/// Popcount, prefix XOR, zero-high-bits, blsr.
pub mod bits;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bits::{
    blsi, blsr, popcount_hw, popcount_swar, prefix_xor_below_clmul, prefix_xor_cascade,
    prefix_xor_clmul, zero_high_bzhi, zero_high_portable, CLMUL_BELOW, PLANES,
};
