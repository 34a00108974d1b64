//! Correctness verification against a trusted PEXT/PDEP.
//!
//! The reference is the BMI2 instruction pair when the running CPU has it, and
//! the bit-serial loops from `ppdep_core::reference` otherwise.

use std::fmt;

use ppdep_core::backend::describe;
use ppdep_core::{
    build_masks_using, deposit_using, deposit_with_using, extract_using, extract_with,
    pdep_reference, pext_reference, Backend, Custom, Hard, Soft,
};

// =============================================================================
// Reference
// =============================================================================

/// Source of expected results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    /// `_pext_u64` / `_pdep_u64`. Only constructed after a successful CPU probe.
    Bmi2,
    /// One-bit-at-a-time loops.
    Serial,
}

impl Reference {
    /// BMI2 if this CPU supports it.
    pub fn hardware() -> Option<Self> {
        #[cfg(target_arch = "x86_64")]
        if std::arch::is_x86_feature_detected!("bmi2") {
            return Some(Self::Bmi2);
        }
        None
    }

    /// Best available reference.
    pub fn detect() -> Self {
        Self::hardware().unwrap_or(Self::Serial)
    }

    /// Expected PEXT result.
    #[inline]
    pub fn pext(self, a: u64, mask: u64) -> u64 {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Bmi2 => bmi2::pext(a, mask),
            _ => pext_reference(a, mask),
        }
    }

    /// Expected PDEP result.
    #[inline]
    pub fn pdep(self, a: u64, mask: u64) -> u64 {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Bmi2 => bmi2::pdep(a, mask),
            _ => pdep_reference(a, mask),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bmi2 => f.write_str("bmi2 (_pext_u64/_pdep_u64)"),
            Self::Serial => f.write_str("bit-serial loops"),
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod bmi2 {
    use std::arch::x86_64::{_pdep_u64, _pext_u64};

    #[target_feature(enable = "bmi2")]
    unsafe fn pext_raw(a: u64, mask: u64) -> u64 {
        _pext_u64(a, mask)
    }

    #[target_feature(enable = "bmi2")]
    unsafe fn pdep_raw(a: u64, mask: u64) -> u64 {
        _pdep_u64(a, mask)
    }

    // Reference::Bmi2 only exists once is_x86_feature_detected!("bmi2") passed.
    pub fn pext(a: u64, mask: u64) -> u64 {
        unsafe { pext_raw(a, mask) }
    }

    pub fn pdep(a: u64, mask: u64) -> u64 {
        unsafe { pdep_raw(a, mask) }
    }
}

// =============================================================================
// Mismatch Report
// =============================================================================

/// A result that disagreed with the reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Operation that failed.
    pub op: &'static str,
    /// Backend label.
    pub backend: String,
    /// Selection mask.
    pub mask: u64,
    /// Input word.
    pub input: u64,
    /// Reference result.
    pub expected: u64,
    /// Backend result.
    pub actual: u64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FAIL {} [{}]\n{:016x} {:016x} {:016x} {:016x}",
            self.op, self.backend, self.mask, self.input, self.expected, self.actual
        )
    }
}

impl std::error::Error for Mismatch {}

// =============================================================================
// Backend Checks
// =============================================================================

/// Checks one mask against a batch of inputs; returns the number of comparisons.
pub type CheckFn = fn(u64, &[u64], Reference) -> Result<usize, Mismatch>;

/// A backend under test.
pub struct BackendCheck {
    /// `scan/count/trim` strategy names, `*` marking hardware instructions.
    pub label: String,
    /// Monomorphized checker.
    pub run: CheckFn,
}

/// Strategy names of `B` joined as `scan/count/trim`.
pub fn backend_label<B: Backend>() -> String {
    describe::<B>()
        .iter()
        .map(|(name, hw)| if *hw { format!("{name}*") } else { (*name).to_string() })
        .collect::<Vec<_>>()
        .join("/")
}

/// Compare extract/deposit of backend `B` with `reference` for every input.
///
/// One `PrecomputedMasks` is shared by all inputs and both operations. The
/// one-shot entry points are checked against it on the first input.
pub fn check_mask<B: Backend>(
    mask: u64,
    inputs: &[u64],
    reference: Reference,
) -> Result<usize, Mismatch> {
    let masks = build_masks_using::<B>(mask);
    let mismatch = |op, input, expected, actual| Mismatch {
        op,
        backend: backend_label::<B>(),
        mask,
        input,
        expected,
        actual,
    };

    let mut tests = 0;
    for (i, &input) in inputs.iter().enumerate() {
        let want_pext = reference.pext(input, mask);
        let got = extract_with(input, &masks);
        if got != want_pext {
            return Err(mismatch("PEXT", input, want_pext, got));
        }
        tests += 1;

        let want_pdep = reference.pdep(input, mask);
        let got = deposit_with_using::<B>(input, &masks);
        if got != want_pdep {
            return Err(mismatch("PDEP", input, want_pdep, got));
        }
        tests += 1;

        if i == 0 {
            let got = extract_using::<B>(input, mask);
            if got != want_pext {
                return Err(mismatch("PEXT one-shot", input, want_pext, got));
            }
            let got = deposit_using::<B>(input, mask);
            if got != want_pdep {
                return Err(mismatch("PDEP one-shot", input, want_pdep, got));
            }
        }
    }
    Ok(tests)
}

/// Checker entry for backend `B`.
pub fn entry<B: Backend>() -> BackendCheck {
    BackendCheck {
        label: backend_label::<B>(),
        run: check_mask::<B>,
    }
}

/// All eight strategy combinations.
pub fn all_backends() -> Vec<BackendCheck> {
    vec![
        entry::<Custom<Soft, Soft, Soft>>(),
        entry::<Custom<Soft, Soft, Hard>>(),
        entry::<Custom<Soft, Hard, Soft>>(),
        entry::<Custom<Soft, Hard, Hard>>(),
        entry::<Custom<Hard, Soft, Soft>>(),
        entry::<Custom<Hard, Soft, Hard>>(),
        entry::<Custom<Hard, Hard, Soft>>(),
        entry::<Custom<Hard, Hard, Hard>>(),
    ]
}
