//! Mask and input generation.
//!
//! Each round draws one uniform mask and one dense mask (the OR of three
//! draws) and tests both together with their complements, so the four classes
//! cover sparse, medium and dense selections.

use rand_core::RngCore;

/// Labels for the four masks returned by [`mask_family`], in order.
pub const MASK_CLASSES: [&str; 4] = ["uniform", "uniform-inverted", "dense", "sparse"];

/// Draw `mask`, `!mask`, `dense`, `!dense`.
pub fn mask_family<R: RngCore + ?Sized>(rng: &mut R) -> [u64; 4] {
    let mask = rng.next_u64();
    let dense = mask | rng.next_u64() | rng.next_u64();
    [mask, !mask, dense, !dense]
}

/// Refill `inputs` with fresh random words.
pub fn fill_inputs<R: RngCore + ?Sized>(rng: &mut R, inputs: &mut [u64]) {
    for x in inputs.iter_mut() {
        *x = rng.next_u64();
    }
}
