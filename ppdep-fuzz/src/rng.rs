//! Bob Jenkins' small fast PRNG (JSF64, also known as RKISS).
//!
//! The default harness generator. With the default seed it reproduces the
//! exact mask and input sequence of the classic ZP7 C test driver, so failures
//! found by either can be cross-checked.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Fixed first state word; the seed fills the other three.
const STATE_A: u64 = 0x89ABCDEF01234567;

/// Seed of the classic driver.
pub const DEFAULT_SEED: u64 = 0xFEDCBA9876543210;

/// Draws discarded after seeding.
const WARMUP_ROUNDS: usize = 1000;

/// JSF64 generator state.
#[derive(Clone, Debug)]
pub struct Jsf64 {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl Jsf64 {
    #[inline]
    fn step(&mut self) -> u64 {
        let e = self.a.wrapping_sub(self.b.rotate_left(7));
        self.a = self.b ^ self.c.rotate_left(13);
        self.b = self.c.wrapping_add(self.d.rotate_left(37));
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }
}

impl Default for Jsf64 {
    fn default() -> Self {
        Self::seed_from_u64(DEFAULT_SEED)
    }
}

impl RngCore for Jsf64 {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Jsf64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed_from_u64(u64::from_le_bytes(seed))
    }

    // The seed goes straight into the state, no PCG expansion.
    fn seed_from_u64(state: u64) -> Self {
        let mut rng = Self {
            a: STATE_A,
            b: state,
            c: state,
            d: state,
        };
        for _ in 0..WARMUP_ROUNDS {
            rng.step();
        }
        rng
    }
}
