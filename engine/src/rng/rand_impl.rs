//! `rand_core` integration
//!
//! Lets the generator drive anything written against `RngCore`
//! (distributions, shuffles, ...). A `SeedableRng` seed is the little-endian
//! bytes of the scalar seed.

use rand_core::{impls, Error, RngCore, SeedableRng};

use super::mt64::MersenneTwister64;

impl RngCore for MersenneTwister64 {
    /// Upper half of one 64-bit draw
    fn next_u32(&mut self) -> u32 {
        (MersenneTwister64::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        MersenneTwister64::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MersenneTwister64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        MersenneTwister64::with_seed(i64::from_le_bytes(seed))
    }

    /// Scalar-seeds directly, so `seed_from_u64(5489)` is the reference
    /// default sequence
    fn seed_from_u64(state: u64) -> Self {
        MersenneTwister64::with_seed(state as i64)
    }
}
