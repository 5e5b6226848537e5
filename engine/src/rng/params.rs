//! MT19937-64 period, seeding and tempering parameters
//!
//! These values define the reference sequence. Changing any of them breaks
//! bit-exact agreement with every other MT19937-64 implementation.

/// Number of 64-bit words in the state vector
pub const N: usize = 312;

/// Middle word offset used by the twist recurrence
pub const M: usize = 156;

/// Most significant 33 bits
pub const HI_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Least significant 31 bits
pub const LO_MASK: u64 = 0x0000_0000_7FFF_FFFF;

/// Twist matrix rows, selected by the low bit of the concatenated word
pub const MAG: [u64; 2] = [0, 0xB502_6F5A_A966_19E9];

/// Seed applied on first draw when the caller never seeded
pub const DEFAULT_SEED: i64 = 5489;

/// Scalar seed that bootstraps array seeding
pub const ARRAY_BOOTSTRAP_SEED: i64 = 19_650_218;

/// Multiplier of the scalar seeding recurrence
pub const SCALAR_SEED_MULT: u64 = 6_364_136_223_846_793_005;

/// Multiplier of the key-mixing pass of array seeding
pub const ARRAY_MIX_MULT: u64 = 3_935_559_000_370_003_845;

/// Multiplier of the final pass of array seeding
pub const ARRAY_FINISH_MULT: u64 = 2_862_933_555_777_941_757;

// Tempering
pub const TEMPER_U: u32 = 29;
pub const TEMPER_D: u64 = 0x5555_5555_5555_5555;
pub const TEMPER_S: u32 = 17;
pub const TEMPER_B: u64 = 0x71D6_7FFF_EDA6_0000;
pub const TEMPER_T: u32 = 37;
pub const TEMPER_C: u64 = 0xFFF7_EEE0_0000_0000;
pub const TEMPER_L: u32 = 43;

/// 2^53 - 1, divisor for the closed `[0, 1]` float
pub const CLOSED_DIVISOR: f64 = 9_007_199_254_740_991.0;

/// 2^53, divisor for the half-open `[0, 1)` float
pub const HALF_OPEN_DIVISOR: f64 = 9_007_199_254_740_992.0;

/// 2^52, divisor for the open `(0, 1)` float
pub const OPEN_DIVISOR: f64 = 4_503_599_627_370_496.0;
