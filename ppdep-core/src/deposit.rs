// =============================================================================
// Deposit (PDEP)
// =============================================================================
//
// Scatter the low bits of the word into the mask-selected positions. This runs
// the extract shifts backwards: largest shift first, so that each stage has
// room above it for the smaller shifts still to come.
//
// The planes record counts where bits *end up*, not where they start, so each
// plane is shifted right by its stage distance before it selects input bits.

use crate::backend::{Backend, Native, Popcount, ZeroHigh};
use crate::ppp::{PrecomputedMasks, build_masks_using};

/// Move the already-trimmed low bits of `a` into place.
#[inline(always)]
fn scatter(mut a: u64, masks: &PrecomputedMasks) -> u64 {
    for (i, &plane) in masks.planes().iter().enumerate().rev() {
        let shift = 1u32 << i;
        let bit = plane >> shift;
        // The two halves never overlap, so add merges them like OR does.
        a = (a & !bit).wrapping_add((a & bit) << shift);
    }
    a
}

/// Deposit the low bits of `a` into the positions selected by `masks`.
///
/// Only the low `popcount(mask)` bits of `a` take part; the rest would collide
/// with the bits being moved.
#[inline(always)]
pub fn deposit_with_using<B: Backend>(a: u64, masks: &PrecomputedMasks) -> u64 {
    let count = <B::Count as Popcount>::popcount(masks.mask());
    let a = <B::Trim as ZeroHigh>::zero_high(a, count);
    scatter(a, masks)
}

/// Build the planes for `mask` with backend `B` and deposit `a`.
#[inline(always)]
pub fn deposit_using<B: Backend>(a: u64, mask: u64) -> u64 {
    let masks = build_masks_using::<B>(mask);
    deposit_with_using::<B>(a, &masks)
}

// =============================================================================
// Cached Deposit
// =============================================================================

/// [`PrecomputedMasks`] plus the deposit input mask, for deposit-heavy callers.
///
/// The popcount and the low-bits mask depend only on the mask, so repeated
/// deposits can skip both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepositMasks {
    masks: PrecomputedMasks,
    keep: u64,
}

impl DepositMasks {
    /// Derive the input mask from `masks` using backend `B`.
    #[inline]
    pub fn new_using<B: Backend>(masks: PrecomputedMasks) -> Self {
        let count = <B::Count as Popcount>::popcount(masks.mask());
        let keep = <B::Trim as ZeroHigh>::zero_high(u64::MAX, count);
        Self { masks, keep }
    }

    /// Derive the input mask from `masks` using the [`Native`] backend.
    #[inline]
    pub fn new(masks: PrecomputedMasks) -> Self {
        Self::new_using::<Native>(masks)
    }

    /// The underlying planes.
    #[inline(always)]
    pub const fn masks(&self) -> &PrecomputedMasks {
        &self.masks
    }

    /// The low `popcount(mask)` bits, all set.
    #[inline(always)]
    pub const fn keep(&self) -> u64 {
        self.keep
    }

    /// Same result as [`deposit_with_using`] for the wrapped masks.
    #[inline(always)]
    pub fn deposit(&self, a: u64) -> u64 {
        scatter(a & self.keep, &self.masks)
    }
}

impl From<PrecomputedMasks> for DepositMasks {
    fn from(masks: PrecomputedMasks) -> Self {
        Self::new(masks)
    }
}
