// =============================================================================
// Primitive Backends
// =============================================================================
//
// Each of the three primitives the algorithms consume is a trait with a
// software (`Soft`) and a hardware (`Hard`) implementor. A `Backend` picks one
// implementor per primitive; the algorithms are generic over `Backend`, so the
// choice is made once at compile time and never branched on in the hot path.
//
// `Hard` only emits the hardware instruction when the compilation target
// enables it (e.g. `-C target-cpu=native`). Otherwise it lowers to an
// equivalent portable sequence, so all eight combinations build everywhere and
// produce identical results.

use core::marker::PhantomData;

use crate::intrinsics::bits::{
    popcount_hw, popcount_swar, prefix_xor_below_clmul, prefix_xor_cascade, prefix_xor_clmul,
    zero_high_bzhi, zero_high_portable,
};

// =============================================================================
// Strategy Traits
// =============================================================================

/// Population count strategy.
pub trait Popcount {
    /// Short name used in reports.
    const NAME: &'static str;
    /// Whether this strategy compiles to a single hardware instruction.
    const ACCELERATED: bool;

    /// Number of set bits in `x`, in `0..=64`.
    fn popcount(x: u64) -> u32;
}

/// Prefix XOR strategy.
pub trait PrefixXor {
    /// Short name used in reports.
    const NAME: &'static str;
    /// Whether this strategy compiles to a single hardware instruction.
    const ACCELERATED: bool;

    /// Bit j of the result is the XOR of bits `0..=j` of `x`.
    fn prefix_xor(x: u64) -> u64;

    /// Bit j of the result is the XOR of bits strictly below j.
    #[inline(always)]
    fn prefix_xor_below(x: u64) -> u64 {
        Self::prefix_xor(x) << 1
    }
}

/// Zero-high-bits strategy.
pub trait ZeroHigh {
    /// Short name used in reports.
    const NAME: &'static str;
    /// Whether this strategy compiles to a single hardware instruction.
    const ACCELERATED: bool;

    /// Clear bits of `x` at positions `index` and above; `index` is in `0..=64`.
    fn zero_high(x: u64, index: u32) -> u64;
}

// =============================================================================
// Implementors
// =============================================================================

/// Portable bit-parallel fallbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Soft;

/// Hardware instructions (POPCNT, PCLMULQDQ, BZHI) where the target has them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hard;

impl Popcount for Soft {
    const NAME: &'static str = "swar";
    const ACCELERATED: bool = false;

    #[inline(always)]
    fn popcount(x: u64) -> u32 {
        popcount_swar(x)
    }
}

impl Popcount for Hard {
    const NAME: &'static str = "popcnt";
    const ACCELERATED: bool = cfg!(all(target_arch = "x86_64", target_feature = "popcnt"));

    #[inline(always)]
    fn popcount(x: u64) -> u32 {
        popcount_hw(x)
    }
}

impl PrefixXor for Soft {
    const NAME: &'static str = "cascade";
    const ACCELERATED: bool = false;

    #[inline(always)]
    fn prefix_xor(x: u64) -> u64 {
        prefix_xor_cascade(x)
    }
}

impl PrefixXor for Hard {
    const NAME: &'static str = "clmul";
    const ACCELERATED: bool = cfg!(all(target_arch = "x86_64", target_feature = "pclmulqdq"));

    #[inline(always)]
    fn prefix_xor(x: u64) -> u64 {
        prefix_xor_clmul(x)
    }

    // One multiply by -2 instead of multiply-then-shift.
    #[inline(always)]
    fn prefix_xor_below(x: u64) -> u64 {
        prefix_xor_below_clmul(x)
    }
}

impl ZeroHigh for Soft {
    const NAME: &'static str = "shift";
    const ACCELERATED: bool = false;

    #[inline(always)]
    fn zero_high(x: u64, index: u32) -> u64 {
        zero_high_portable(x, index)
    }
}

impl ZeroHigh for Hard {
    const NAME: &'static str = "bzhi";
    const ACCELERATED: bool = cfg!(all(target_arch = "x86_64", target_feature = "bmi2"));

    #[inline(always)]
    fn zero_high(x: u64, index: u32) -> u64 {
        zero_high_bzhi(x, index)
    }
}

// =============================================================================
// Backend Bundles
// =============================================================================

/// One strategy per primitive.
pub trait Backend {
    /// Prefix XOR used by the mask builder.
    type Scan: PrefixXor;
    /// Population count used by deposit.
    type Count: Popcount;
    /// Input trimming used by deposit.
    type Trim: ZeroHigh;
}

/// Any combination of strategies, e.g. `Custom<Hard, Soft, Hard>`.
///
/// Type parameters are, in order: prefix XOR, popcount, zero-high.
pub struct Custom<X, P, Z>(PhantomData<(X, P, Z)>);

impl<X: PrefixXor, P: Popcount, Z: ZeroHigh> Backend for Custom<X, P, Z> {
    type Scan = X;
    type Count = P;
    type Trim = Z;
}

/// Software fallbacks only; identical codegen on every target.
pub type Portable = Custom<Soft, Soft, Soft>;

/// Prefix XOR strategy selected by the `clmul` feature.
#[cfg(feature = "clmul")]
pub type NativeScan = Hard;
/// Prefix XOR strategy selected by the `clmul` feature.
#[cfg(not(feature = "clmul"))]
pub type NativeScan = Soft;

/// Popcount strategy selected by the `popcnt` feature.
#[cfg(feature = "popcnt")]
pub type NativeCount = Hard;
/// Popcount strategy selected by the `popcnt` feature.
#[cfg(not(feature = "popcnt"))]
pub type NativeCount = Soft;

/// Zero-high strategy selected by the `bzhi` feature.
#[cfg(feature = "bzhi")]
pub type NativeTrim = Hard;
/// Zero-high strategy selected by the `bzhi` feature.
#[cfg(not(feature = "bzhi"))]
pub type NativeTrim = Soft;

/// The build-time configured backend used by the crate-level functions.
pub type Native = Custom<NativeScan, NativeCount, NativeTrim>;

/// Strategy names of a backend in `scan, count, trim` order.
///
/// Each name is paired with whether that strategy runs on a real hardware
/// instruction in this build.
pub fn describe<B: Backend>() -> [(&'static str, bool); 3] {
    [
        (<B::Scan as PrefixXor>::NAME, <B::Scan as PrefixXor>::ACCELERATED),
        (<B::Count as Popcount>::NAME, <B::Count as Popcount>::ACCELERATED),
        (<B::Trim as ZeroHigh>::NAME, <B::Trim as ZeroHigh>::ACCELERATED),
    ]
}
