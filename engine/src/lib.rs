//! MT19937-64 - Rust Engine
//!
//! Deterministic 64-bit Mersenne Twister with bit-exact reference output.
//!
//! # Architecture
//!
//! - **rng**: State vector, seeding, twist transform and tempered output
//! - **snapshot**: Raw capture/restore of a generator position
//! - **ffi**: Python bindings (behind the `pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, for scalar and array seeds alike
//! 2. An unseeded generator behaves exactly as one seeded with 5489
//! 3. The generator is a plain value: no globals, no internal locking

// Module declarations
pub mod rng;
pub mod snapshot;

// Re-exports for convenience
pub use rng::{FloatVariant, MersenneTwister64, SeedError, DEFAULT_SEED, STATE_WORDS};
pub use snapshot::{GeneratorSnapshot, SnapshotError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mt19937_64(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyMersenneTwister64>()?;
    Ok(())
}
