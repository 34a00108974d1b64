// =============================================================================
// Parallel-Prefix Popcount
// =============================================================================
//
// For every bit j of a mask, the distance a selected bit at j has to travel is
// the number of *unset* mask bits below j. Instead of 64 scalar popcounts, the
// counts are kept "vertically": plane i holds bit i of all 64 counts at once.
//
// The planes come out of a 6-bit ripple-carry adder built from 1-bit adders.
// An exclusive prefix XOR is a 1-bit running sum over the unset bits (a sum
// that wraps without carrying). ANDing the addends with that sum leaves the
// positions where the 1-bit sum overflowed, which are the carries fed into the
// next plane.

use crate::backend::{Backend, PrefixXor};
use crate::intrinsics::bits::PLANES;

/// A mask together with its six parallel-prefix-popcount planes.
///
/// Built once per mask by [`build_masks_using`] and read-only afterwards. The
/// same value drives both extract and deposit, and can be cached and shared
/// freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrecomputedMasks {
    mask: u64,
    plane: [u64; PLANES],
}

impl PrecomputedMasks {
    /// The original selection mask, not inverted.
    #[inline(always)]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// All six planes, plane 0 first.
    ///
    /// Bit j of `planes()[i]` is bit i of the count of unset mask bits strictly
    /// below j.
    #[inline(always)]
    pub const fn planes(&self) -> &[u64; PLANES] {
        &self.plane
    }

    /// Plane `i`: the bits that move by `1 << i` during extract.
    ///
    /// # Panics
    /// Panics if `i >= 6`.
    #[inline(always)]
    pub const fn plane(&self, i: usize) -> u64 {
        self.plane[i]
    }

    /// Number of selected bits, i.e. the width of the extract result.
    #[inline(always)]
    pub const fn popcount(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Decode the 6-bit count stored for bit position `bit`.
    ///
    /// For a selected bit this is how far extract moves it right.
    ///
    /// # Panics
    /// Panics if `bit >= 64`.
    pub fn shift_distance(&self, bit: u32) -> u32 {
        assert!(bit < 64);
        self.plane
            .iter()
            .enumerate()
            .fold(0, |acc, (i, p)| acc | ((((p >> bit) & 1) as u32) << i))
    }
}

/// Build the parallel-prefix-popcount planes for `mask`.
///
/// Six exclusive prefix XORs of the inverted mask, each followed by an AND to
/// keep the carries for the next plane.
#[inline(always)]
pub fn build_masks_using<B: Backend>(mask: u64) -> PrecomputedMasks {
    let mut plane = [0u64; PLANES];

    // Count *unset* bits.
    let mut carry = !mask;
    for p in plane.iter_mut() {
        let bit = <B::Scan as PrefixXor>::prefix_xor_below(carry);
        *p = bit;
        carry &= bit;
    }

    PrecomputedMasks { mask, plane }
}
