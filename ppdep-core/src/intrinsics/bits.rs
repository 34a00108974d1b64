// =============================================================================
// Bit Manipulation Intrinsics
// =============================================================================
//
// The three primitives the parallel-prefix popcount is built from: population
// count, prefix XOR and "zero high bits". Each comes in a portable SWAR form and
// a hardware form. The hardware forms use x86_64 instructions when the target
// enables them at compile time and fall back to the portable form otherwise.

#[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq"))]
use core::arch::x86_64::{_mm_clmulepi64_si128, _mm_cvtsi64_si128, _mm_cvtsi128_si64};

/// Number of bit-planes needed to encode a shift distance in `0..64`.
pub const PLANES: usize = 6;

/// Carry-less multiplier producing the prefix XOR shifted left by one.
///
/// This is `-2` as a 64-bit word: all ones with bit 0 clear.
pub const CLMUL_BELOW: u64 = !1;

// SWAR popcount field masks.
const M1: u64 = 0x5555555555555555;
const M2: u64 = 0x3333333333333333;
const M4: u64 = 0x0F0F0F0F0F0F0F0F;
const H01: u64 = 0x0101010101010101;

// =============================================================================
// Population Count
// =============================================================================

/// Count set bits with the SWAR reduction.
///
/// Sums 1-bit counts into 2-bit fields, then 4-bit, then 8-bit fields, and
/// folds the eight byte counts into the top byte with one multiply.
#[inline(always)]
pub fn popcount_swar(x: u64) -> u32 {
    // Per 2-bit field v - (v >> 1) never borrows.
    let x = x - ((x >> 1) & M1);
    let x = (x & M2) + ((x >> 2) & M2);
    let x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

/// Count set bits with POPCNT.
///
/// Uses the x86_64 instruction when `popcnt` is enabled, `count_ones` otherwise.
#[inline(always)]
pub fn popcount_hw(x: u64) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
    unsafe {
        core::arch::x86_64::_popcnt64(x as i64) as u32
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
    {
        x.count_ones()
    }
}

// =============================================================================
// Prefix XOR
// =============================================================================

/// Inclusive prefix XOR: bit j of the result is the parity of bits `0..=j`.
///
/// Hillis-Steele cascade at strides 1, 2, 4, 8, 16 and 32.
#[inline(always)]
pub fn prefix_xor_cascade(mut x: u64) -> u64 {
    for i in 0..PLANES {
        x ^= x << (1 << i);
    }
    x
}

/// Carry-less product of `a` and `b`, low 64 bits.
#[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq"))]
#[inline(always)]
fn clmul_lo(a: u64, b: u64) -> u64 {
    unsafe {
        let product =
            _mm_clmulepi64_si128::<0x00>(_mm_cvtsi64_si128(a as i64), _mm_cvtsi64_si128(b as i64));
        _mm_cvtsi128_si64(product) as u64
    }
}

/// Inclusive prefix XOR with PCLMULQDQ (multiply by an all-ones word).
///
/// Falls back to [`prefix_xor_cascade`] when `pclmulqdq` is not enabled.
#[inline(always)]
pub fn prefix_xor_clmul(x: u64) -> u64 {
    #[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq"))]
    {
        clmul_lo(x, u64::MAX)
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "pclmulqdq")))]
    {
        prefix_xor_cascade(x)
    }
}

/// Exclusive prefix XOR with PCLMULQDQ: `prefix_xor(x) << 1` in one multiply.
///
/// Bit j of the result is the parity of bits strictly below j, which is the
/// 1-bit running count the mask builder needs.
#[inline(always)]
pub fn prefix_xor_below_clmul(x: u64) -> u64 {
    #[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq"))]
    {
        clmul_lo(x, CLMUL_BELOW)
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "pclmulqdq")))]
    {
        prefix_xor_cascade(x) << 1
    }
}

// =============================================================================
// Zero High Bits
// =============================================================================

/// Clear every bit of `x` at position `index` and above (portable).
///
/// `index` must be in `0..=64`. A plain `(1 << index) - 1` wraps to `0` at
/// `index == 64`, so the `index >> 6` term knocks out the shifted bit in that
/// one case and the subtraction yields all ones instead.
#[inline(always)]
pub fn zero_high_portable(x: u64, index: u32) -> u64 {
    let pop_mask = 1u64.wrapping_shl(index) & !((index >> 6) as u64);
    x & pop_mask.wrapping_sub(1)
}

/// Clear every bit of `x` at position `index` and above with BZHI.
///
/// Falls back to [`zero_high_portable`] when `bmi2` is not enabled.
#[inline(always)]
pub fn zero_high_bzhi(x: u64, index: u32) -> u64 {
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    unsafe {
        core::arch::x86_64::_bzhi_u64(x, index)
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    {
        zero_high_portable(x, index)
    }
}

// =============================================================================
// Misc
// =============================================================================

/// Bit scan and reset: clears the lowest set bit.
///
/// Equivalent to `x & (x - 1)`.
#[inline(always)]
pub fn blsr(x: u64) -> u64 {
    x & (x.wrapping_sub(1))
}

/// Isolate the lowest set bit (`0` for `0`).
#[inline(always)]
pub fn blsi(x: u64) -> u64 {
    x & x.wrapping_neg()
}
