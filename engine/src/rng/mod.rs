//! Deterministic random number generation
//!
//! MT19937-64: 64-bit Mersenne Twister with bit-exact reference output.
//! Not suitable for cryptographic use.

mod mt64;
mod params;
mod rand_impl;

pub use mt64::{FloatVariant, MersenneTwister64, SeedError};
pub use params::{DEFAULT_SEED, N as STATE_WORDS};
