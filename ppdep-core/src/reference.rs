// =============================================================================
// Bit-Serial Reference Implementations
// =============================================================================
//
// One mask bit per iteration. Slow and obviously correct; the tests and the
// fuzz harness compare the parallel-prefix versions against these when the
// BMI2 instructions are not available.

use crate::intrinsics::bits::{blsi, blsr};

/// PEXT, one selected bit at a time.
pub fn pext_reference(a: u64, mask: u64) -> u64 {
    let mut result = 0u64;
    let mut out = 1u64;
    let mut m = mask;

    while m != 0 {
        if a & blsi(m) != 0 {
            result |= out;
        }
        m = blsr(m);
        out <<= 1;
    }
    result
}

/// PDEP, one selected bit at a time.
pub fn pdep_reference(a: u64, mask: u64) -> u64 {
    let mut result = 0u64;
    let mut a = a;
    let mut m = mask;

    while m != 0 {
        if a & 1 != 0 {
            result |= blsi(m);
        }
        m = blsr(m);
        a >>= 1;
    }
    result
}
