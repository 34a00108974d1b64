//! Every strategy combination must produce the same bits.
//!
//! The hardware strategies only differ from the software ones in speed, so all
//! eight `Custom<X, P, Z>` backends are checked against the bit-serial
//! reference on boundary words and on seeded random mask families.

use crate::common::{mask_family, seeded_rng, BOUNDARY_WORDS};
use ppdep_core::backend::{describe, Popcount, PrefixXor, ZeroHigh};
use ppdep_core::{
    build_masks_using, deposit_using, deposit_with_using, extract_using, extract_with,
    pdep_reference, pext_reference, Backend, DepositMasks, Hard, Native, Portable, Soft,
};
use rand::Rng;

const RANDOM_ROUNDS: usize = 2_000;
const INPUTS_PER_MASK: usize = 8;

fn check_boundaries<B: Backend>() {
    for &mask in BOUNDARY_WORDS {
        let masks = build_masks_using::<B>(mask);
        for &a in BOUNDARY_WORDS {
            assert_eq!(
                extract_with(a, &masks),
                pext_reference(a, mask),
                "extract {:?}: mask {:#018x}, a {:#018x}",
                describe::<B>(),
                mask,
                a
            );
            assert_eq!(
                deposit_with_using::<B>(a, &masks),
                pdep_reference(a, mask),
                "deposit {:?}: mask {:#018x}, a {:#018x}",
                describe::<B>(),
                mask,
                a
            );
        }
    }
}

fn check_random<B: Backend>() {
    let mut rng = seeded_rng(0x89ABCDEF01234567);
    for _ in 0..RANDOM_ROUNDS {
        for mask in mask_family(&mut rng) {
            let masks = build_masks_using::<B>(mask);
            let cached = DepositMasks::new_using::<B>(masks);
            for _ in 0..INPUTS_PER_MASK {
                let a: u64 = rng.r#gen();
                let expected_pext = pext_reference(a, mask);
                let expected_pdep = pdep_reference(a, mask);

                assert_eq!(extract_using::<B>(a, mask), expected_pext, "mask {:#018x}", mask);
                assert_eq!(deposit_using::<B>(a, mask), expected_pdep, "mask {:#018x}", mask);
                assert_eq!(cached.deposit(a), expected_pdep, "mask {:#018x}", mask);
            }
        }
    }
}

fn check_planes_match_portable<B: Backend>() {
    let mut rng = seeded_rng(7);
    for _ in 0..RANDOM_ROUNDS {
        let mask: u64 = rng.r#gen();
        assert_eq!(build_masks_using::<B>(mask), build_masks_using::<Portable>(mask));
    }
}

#[test]
fn test_all_backends_on_boundaries() {
    for_each_backend!(check_boundaries);
}

#[test]
fn test_all_backends_on_random_masks() {
    for_each_backend!(check_random);
}

#[test]
fn test_all_backends_build_identical_planes() {
    for_each_backend!(check_planes_match_portable);
}

#[test]
fn test_strategies_agree_on_random_words() {
    let mut rng = seeded_rng(42);
    for _ in 0..10_000 {
        let x: u64 = rng.r#gen();
        let index = rng.gen_range(0..=64u32);

        assert_eq!(<Hard as Popcount>::popcount(x), <Soft as Popcount>::popcount(x));
        assert_eq!(<Hard as PrefixXor>::prefix_xor(x), <Soft as PrefixXor>::prefix_xor(x));
        assert_eq!(
            <Hard as PrefixXor>::prefix_xor_below(x),
            <Soft as PrefixXor>::prefix_xor_below(x)
        );
        assert_eq!(
            <Hard as ZeroHigh>::zero_high(x, index),
            <Soft as ZeroHigh>::zero_high(x, index)
        );
    }
}

#[test]
fn test_describe_names() {
    let portable = describe::<Portable>();
    assert_eq!(portable, [("cascade", false), ("swar", false), ("shift", false)]);

    // Default features select the hardware strategies
    let native = describe::<Native>();
    #[cfg(feature = "clmul")]
    assert_eq!(native[0].0, "clmul");
    #[cfg(feature = "popcnt")]
    assert_eq!(native[1].0, "popcnt");
    #[cfg(feature = "bzhi")]
    assert_eq!(native[2].0, "bzhi");
    let _ = native;
}
