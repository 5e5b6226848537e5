//! MT19937-64 random number generator
//!
//! 64-bit Mersenne Twister with 312 words of state and a period of
//! 2^19937 - 1.
//!
//! # Algorithm
//!
//! The state vector is seeded either from a single integer (linear
//! recurrence) or from an array of keys (the recurrence re-mixed with the
//! keys). Words are read out one at a time through a tempering cascade.
//! Once every word has been read, the twist transform regenerates the whole
//! vector in a single pass.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit, as every other MT19937-64
//! implementation. All arithmetic is wrapping `u64` arithmetic; overflow is
//! part of the recurrence.

use std::fmt;

use thiserror::Error;

use super::params::{
    ARRAY_BOOTSTRAP_SEED, ARRAY_FINISH_MULT, ARRAY_MIX_MULT, CLOSED_DIVISOR, DEFAULT_SEED,
    HALF_OPEN_DIVISOR, HI_MASK, LO_MASK, M, MAG, N, OPEN_DIVISOR, SCALAR_SEED_MULT, TEMPER_B,
    TEMPER_C, TEMPER_D, TEMPER_L, TEMPER_S, TEMPER_T, TEMPER_U,
};

/// Errors that can occur while seeding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Array seeding requires at least one key")]
    EmptyKey,
}

/// Rounding convention used to turn a 64-bit word into an `f64`
///
/// The three conventions are not interchangeable: each uses its own divisor
/// and produces a different value for the same word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatVariant {
    /// `[0, 1]`: top 53 bits divided by 2^53 - 1
    Closed,
    /// `[0, 1)`: top 53 bits divided by 2^53
    HalfOpen,
    /// `(0, 1)`: top 52 bits plus one half, divided by 2^52
    Open,
}

impl FloatVariant {
    /// Convert an already tempered word
    pub fn apply(self, word: u64) -> f64 {
        match self {
            FloatVariant::Closed => (word >> 11) as f64 * (1.0 / CLOSED_DIVISOR),
            FloatVariant::HalfOpen => (word >> 11) as f64 * (1.0 / HALF_OPEN_DIVISOR),
            FloatVariant::Open => ((word >> 12) as f64 + 0.5) * (1.0 / OPEN_DIVISOR),
        }
    }
}

/// Deterministic random number generator using MT19937-64
///
/// A generator that was never seeded seeds itself with 5489 on the first
/// draw, so `MersenneTwister64::new()` and `MersenneTwister64::with_seed(5489)`
/// produce the same sequence.
///
/// # Example
/// ```
/// use mt19937_64::MersenneTwister64;
///
/// let mut rng = MersenneTwister64::with_seed(5489);
/// assert_eq!(rng.next_u64(), 14514284786278117030);
///
/// let probability = rng.next_f64();
/// assert!((0.0..1.0).contains(&probability));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MersenneTwister64 {
    /// State vector
    state: [u64; N],

    /// Next word to read; 0 or N means the vector must be twisted first
    index: usize,

    /// False until seeded explicitly or by the first draw
    seeded: bool,
}

impl Default for MersenneTwister64 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MersenneTwister64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister64")
            .field("index", &self.index)
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}

impl MersenneTwister64 {
    /// Create an unseeded generator
    ///
    /// The default seed is applied lazily by the first draw.
    pub fn new() -> Self {
        Self {
            state: [0; N],
            index: 0,
            seeded: false,
        }
    }

    /// Create a generator seeded with a scalar
    ///
    /// # Example
    /// ```
    /// use mt19937_64::MersenneTwister64;
    ///
    /// let mut a = MersenneTwister64::with_seed(-7);
    /// let mut b = MersenneTwister64::with_seed(-7);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn with_seed(seed: i64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create a generator seeded from a key array
    ///
    /// # Panics
    /// Panics if `keys` is empty
    ///
    /// # Example
    /// ```
    /// use mt19937_64::MersenneTwister64;
    ///
    /// let mut rng = MersenneTwister64::with_keys(&[0x12345, 0x23456, 0x34567, 0x45678]);
    /// assert_eq!(rng.next_u64(), 7266447313870364031);
    /// ```
    pub fn with_keys(keys: &[u64]) -> Self {
        let mut rng = Self::new();
        rng.seed_by_array(keys);
        rng
    }

    /// Initialize the state vector from a single integer
    ///
    /// Only the bit pattern of `seed` matters; negative values are fine.
    /// Resets the cursor so the next draw starts a fresh twist.
    pub fn seed(&mut self, seed: i64) {
        self.state[0] = seed as u64;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = SCALAR_SEED_MULT
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.index = 0;
        self.seeded = true;
    }

    /// Initialize the state vector from an array of keys
    ///
    /// Keys longer than the state vector are all consumed; shorter key arrays
    /// are cycled.
    ///
    /// # Panics
    /// Panics if `keys` is empty. Use [`try_seed_by_array`] to get an error
    /// instead.
    ///
    /// [`try_seed_by_array`]: MersenneTwister64::try_seed_by_array
    pub fn seed_by_array(&mut self, keys: &[u64]) {
        assert!(!keys.is_empty(), "seed_by_array requires at least one key");
        self.mix_keys(keys);
    }

    /// Fallible form of [`seed_by_array`]
    ///
    /// On error the generator is left untouched.
    ///
    /// [`seed_by_array`]: MersenneTwister64::seed_by_array
    pub fn try_seed_by_array(&mut self, keys: &[u64]) -> Result<(), SeedError> {
        if keys.is_empty() {
            return Err(SeedError::EmptyKey);
        }
        self.mix_keys(keys);
        Ok(())
    }

    fn mix_keys(&mut self, keys: &[u64]) {
        self.seed(ARRAY_BOOTSTRAP_SEED);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(keys.len()) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 62)).wrapping_mul(ARRAY_MIX_MULT))
                .wrapping_add(keys[j])
                .wrapping_add(j as u64);
            i = self.wrap_seed_cursor(i + 1);
            j += 1;
            if j >= keys.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i]
                ^ (prev ^ (prev >> 62)).wrapping_mul(ARRAY_FINISH_MULT))
            .wrapping_sub(i as u64);
            i = self.wrap_seed_cursor(i + 1);
        }

        // MSB sentinel
        self.state[0] = 1 << 63;
    }

    /// Seeding cursor wrap: past the end, carry the last word to the front
    fn wrap_seed_cursor(&mut self, i: usize) -> usize {
        if i >= N {
            self.state[0] = self.state[N - 1];
            1
        } else {
            i
        }
    }

    /// Regenerate all N words of the state vector
    fn twist(&mut self) {
        for i in 0..N - M {
            let x = (self.state[i] & HI_MASK) | (self.state[i + 1] & LO_MASK);
            self.state[i] = self.state[i + M] ^ (x >> 1) ^ MAG[(x & 1) as usize];
        }
        for i in N - M..N - 1 {
            let x = (self.state[i] & HI_MASK) | (self.state[i + 1] & LO_MASK);
            self.state[i] = self.state[i + M - N] ^ (x >> 1) ^ MAG[(x & 1) as usize];
        }
        let x = (self.state[N - 1] & HI_MASK) | (self.state[0] & LO_MASK);
        self.state[N - 1] = self.state[M - 1] ^ (x >> 1) ^ MAG[(x & 1) as usize];
    }

    /// Generate next random u64 value
    ///
    /// Applies the default seed if the generator was never seeded, and
    /// twists the state vector whenever the cursor is exhausted.
    pub fn next_u64(&mut self) -> u64 {
        if !self.seeded {
            self.seed(DEFAULT_SEED);
        }

        let mut i = self.index;
        if i == 0 || i >= N {
            self.twist();
            i = 0;
        }

        let mut x = self.state[i];
        x ^= (x >> TEMPER_U) & TEMPER_D;
        x ^= (x << TEMPER_S) & TEMPER_B;
        x ^= (x << TEMPER_T) & TEMPER_C;
        x ^= x >> TEMPER_L;

        self.index = i + 1;
        x
    }

    /// Generate a non-negative i64 in `[0, 2^63)`
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }

    /// Generate an f64 using the given rounding convention
    ///
    /// # Example
    /// ```
    /// use mt19937_64::{FloatVariant, MersenneTwister64};
    ///
    /// let mut rng = MersenneTwister64::with_seed(42);
    /// let value = rng.next_f64_variant(FloatVariant::Open);
    /// assert!(value > 0.0 && value < 1.0);
    /// ```
    pub fn next_f64_variant(&mut self, variant: FloatVariant) -> f64 {
        variant.apply(self.next_u64())
    }

    /// Generate random f64 in range [0.0, 1.0]
    pub fn next_f64_closed(&mut self) -> f64 {
        self.next_f64_variant(FloatVariant::Closed)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Useful for sampling from probability distributions.
    pub fn next_f64(&mut self) -> f64 {
        self.next_f64_variant(FloatVariant::HalfOpen)
    }

    /// Generate random f64 in range (0.0, 1.0)
    pub fn next_f64_open(&mut self) -> f64 {
        self.next_f64_variant(FloatVariant::Open)
    }

    /// Whether a seed has been applied (explicitly or by a draw)
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Position of the next word within the current state vector
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn state(&self) -> &[u64; N] {
        &self.state
    }

    pub(crate) fn from_parts(state: [u64; N], index: usize, seeded: bool) -> Self {
        Self {
            state,
            index,
            seeded,
        }
    }
}
