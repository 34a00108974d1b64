//! Shared test utilities for ppdep-core tests.
//!
//! Boundary words, the low-bits mask used by the round-trip properties, a
//! seeded RNG and a macro that instantiates a check for every backend.

#![allow(dead_code)] // Not all test files use all helpers

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Words that exercise the edges of every primitive.
pub const BOUNDARY_WORDS: &[u64] = &[
    0,
    u64::MAX,
    1,
    1 << 63,
    !1,
    !(1 << 63),
    0x5555555555555555,
    0xAAAAAAAAAAAAAAAA,
    0x3333333333333333,
    0x0F0F0F0F0F0F0F0F,
    0x00FF00FF00FF00FF,
    0x0000FFFF0000FFFF,
    0x00000000FFFFFFFF,
    0xFFFFFFFF00000000,
    0x8000000000000001,
    0x0123456789ABCDEF,
    0xFEDCBA9876543210,
];

/// Mask with the low `count` bits set; `count == 64` gives all ones.
pub fn low_mask(count: u32) -> u64 {
    if count >= 64 {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

/// Deterministic RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Masks of low, medium and high density from one RNG draw sequence.
///
/// `m`, `!m`, `m | r1 | r2` and its complement, as the fuzz harness does.
pub fn mask_family(rng: &mut impl Rng) -> [u64; 4] {
    let mask: u64 = rng.r#gen();
    let dense = mask | rng.r#gen::<u64>() | rng.r#gen::<u64>();
    [mask, !mask, dense, !dense]
}

/// Run `$check::<B>()` for all eight strategy combinations.
#[allow(unused_macros)]
macro_rules! for_each_backend {
    ($check:ident) => {{
        use ppdep_core::{Custom, Hard, Soft};
        $check::<Custom<Soft, Soft, Soft>>();
        $check::<Custom<Soft, Soft, Hard>>();
        $check::<Custom<Soft, Hard, Soft>>();
        $check::<Custom<Soft, Hard, Hard>>();
        $check::<Custom<Hard, Soft, Soft>>();
        $check::<Custom<Hard, Soft, Hard>>();
        $check::<Custom<Hard, Hard, Soft>>();
        $check::<Custom<Hard, Hard, Hard>>();
    }};
}
