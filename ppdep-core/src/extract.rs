// =============================================================================
// Extract (PEXT)
// =============================================================================
//
// Gather the mask-selected bits into the low end of the word. Every selected
// bit moves right by its plane-encoded distance, composed from shifts of 1, 2,
// 4, 8, 16 and 32. The shifts run smallest first so that bits bound for
// different destinations never share a position in between stages.

use crate::backend::Backend;
use crate::ppp::{PrecomputedMasks, build_masks_using};

/// Extract the bits of `a` selected by `masks`, packed into the low bits.
///
/// Uses no backend primitive, so the same code serves every backend.
#[inline(always)]
pub fn extract_with(a: u64, masks: &PrecomputedMasks) -> u64 {
    // Unselected bits would collide with bits shifted into their place.
    let mut a = a & masks.mask();

    for (i, &bit) in masks.planes().iter().enumerate() {
        let shift = 1u32 << i;
        a = (a & !bit) | ((a & bit) >> shift);
    }
    a
}

/// Build the planes for `mask` with backend `B` and extract from `a`.
#[inline(always)]
pub fn extract_using<B: Backend>(a: u64, mask: u64) -> u64 {
    let masks = build_masks_using::<B>(mask);
    extract_with(a, &masks)
}
