//! Unit tests for ppdep-core intrinsics module.
//!
//! Tests cover: bits.rs
//! Focus: boundary words and agreement between software and hardware forms.

#[cfg(test)]
mod tests {
    use crate::common::BOUNDARY_WORDS;
    use ppdep_core::intrinsics::{
        blsi, blsr, popcount_hw, popcount_swar, prefix_xor_below_clmul, prefix_xor_cascade,
        prefix_xor_clmul, zero_high_bzhi, zero_high_portable, CLMUL_BELOW, PLANES,
    };

    // =========================================================================
    // popcount
    // =========================================================================

    #[test]
    fn test_popcount_swar_extremes() {
        assert_eq!(popcount_swar(0), 0);
        assert_eq!(popcount_swar(u64::MAX), 64);
        assert_eq!(popcount_swar(0x5555555555555555), 32);
        assert_eq!(popcount_swar(0x8000000000000001), 2);
    }

    #[test]
    fn test_popcount_swar_single_bits() {
        for i in 0..64 {
            assert_eq!(popcount_swar(1u64 << i), 1, "Failed for bit {}", i);
            assert_eq!(popcount_swar(!(1u64 << i)), 63, "Failed for bit {}", i);
        }
    }

    #[test]
    fn test_popcount_swar_low_runs() {
        // Every count 0..=64 appears once
        let mut x = 0u64;
        for n in 0..64 {
            assert_eq!(popcount_swar(x), n);
            x = (x << 1) | 1;
        }
        assert_eq!(popcount_swar(x), 64);
    }

    #[test]
    fn test_popcount_hw_matches_swar_on_boundaries() {
        for &x in BOUNDARY_WORDS {
            assert_eq!(popcount_hw(x), popcount_swar(x), "x = {:#018x}", x);
            assert_eq!(popcount_hw(x), x.count_ones());
        }
    }

    // =========================================================================
    // prefix XOR
    // =========================================================================

    #[test]
    fn test_prefix_xor_single_bit_fills_upward() {
        // A lone bit at i turns on every position from i up
        for i in 0..64 {
            assert_eq!(prefix_xor_cascade(1u64 << i), u64::MAX << i, "Failed for bit {}", i);
        }
    }

    #[test]
    fn test_prefix_xor_pairs_make_runs() {
        // Bits at 2 and 5: parity is 1 on [2, 5)
        assert_eq!(prefix_xor_cascade(0b100100), 0b011100);
        assert_eq!(prefix_xor_cascade(0), 0);
        // All ones alternates parity
        assert_eq!(prefix_xor_cascade(u64::MAX), 0x5555555555555555);
    }

    #[test]
    fn test_prefix_xor_clmul_matches_cascade() {
        for &x in BOUNDARY_WORDS {
            assert_eq!(prefix_xor_clmul(x), prefix_xor_cascade(x), "x = {:#018x}", x);
            assert_eq!(
                prefix_xor_below_clmul(x),
                prefix_xor_cascade(x) << 1,
                "x = {:#018x}",
                x
            );
        }
    }

    #[test]
    fn test_clmul_multiplier_is_minus_two() {
        assert_eq!(CLMUL_BELOW, (-2i64) as u64);
        assert_eq!(PLANES, 6);
    }

    // =========================================================================
    // zero high bits
    // =========================================================================

    #[test]
    fn test_zero_high_portable_all_indices() {
        let x = 0xFEDCBA9876543210u64;
        for index in 0..64u32 {
            assert_eq!(zero_high_portable(x, index), x & ((1u64 << index) - 1), "index {}", index);
        }
    }

    #[test]
    fn test_zero_high_portable_index_64_keeps_everything() {
        // Naive (1 << 64) - 1 would wrap to 0 here
        assert_eq!(zero_high_portable(u64::MAX, 64), u64::MAX);
        assert_eq!(zero_high_portable(0x0123456789ABCDEF, 64), 0x0123456789ABCDEF);
    }

    #[test]
    fn test_zero_high_index_zero_clears_everything() {
        assert_eq!(zero_high_portable(u64::MAX, 0), 0);
        assert_eq!(zero_high_bzhi(u64::MAX, 0), 0);
    }

    #[test]
    fn test_zero_high_bzhi_matches_portable() {
        for &x in BOUNDARY_WORDS {
            for index in 0..=64u32 {
                assert_eq!(
                    zero_high_bzhi(x, index),
                    zero_high_portable(x, index),
                    "x = {:#018x}, index = {}",
                    x,
                    index
                );
            }
        }
    }

    // =========================================================================
    // blsr / blsi
    // =========================================================================

    #[test]
    fn test_blsr_blsi_split_lowest_bit() {
        assert_eq!(blsr(0b1011), 0b1010);
        assert_eq!(blsi(0b1011), 0b0001);
        assert_eq!(blsi(0b1000), 0b1000);
        assert_eq!(blsr(0), 0);
        assert_eq!(blsi(0), 0);
        assert_eq!(blsi(1 << 63), 1 << 63);
    }

    #[test]
    fn test_blsr_iteration_pattern() {
        // Reference loops walk the mask this way
        let mut mask = 0b10110100u64;
        let mut bits = Vec::new();
        while mask != 0 {
            bits.push(blsi(mask).trailing_zeros());
            mask = blsr(mask);
        }
        assert_eq!(bits, vec![2, 4, 5, 7]);
    }
}
