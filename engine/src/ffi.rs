//! PyO3 wrapper for the generator
//!
//! Exposes the draw and seeding operations to Python. Errors cross the
//! boundary as `ValueError`; nothing panics into the interpreter.
//!
//! # Example (from Python)
//!
//! ```python
//! from mt19937_64 import MersenneTwister64
//!
//! rng = MersenneTwister64()
//! rng.seed_by_array([0x12345, 0x23456, 0x34567, 0x45678])
//! print(rng.uint64())      # 7266447313870364031
//! print(rng.float64_b())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::MersenneTwister64;

#[pyclass(name = "MersenneTwister64")]
pub struct PyMersenneTwister64 {
    inner: MersenneTwister64,
}

#[pymethods]
impl PyMersenneTwister64 {
    /// Create a generator, optionally scalar-seeded
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i64>) -> Self {
        let inner = match seed {
            Some(seed) => MersenneTwister64::with_seed(seed),
            None => MersenneTwister64::new(),
        };
        PyMersenneTwister64 { inner }
    }

    fn seed(&mut self, seed: i64) {
        self.inner.seed(seed);
    }

    /// Raises ValueError if `keys` is empty
    fn seed_by_array(&mut self, keys: Vec<u64>) -> PyResult<()> {
        self.inner
            .try_seed_by_array(&keys)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn uint64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn int63(&mut self) -> i64 {
        self.inner.next_i63()
    }

    /// Float in [0, 1]
    fn float64_a(&mut self) -> f64 {
        self.inner.next_f64_closed()
    }

    /// Float in [0, 1)
    fn float64_b(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Float in (0, 1)
    fn float64_c(&mut self) -> f64 {
        self.inner.next_f64_open()
    }

    /// SHA-256 of the current position
    fn fingerprint(&self) -> String {
        self.inner.snapshot().fingerprint()
    }

    fn __repr__(&self) -> String {
        format!(
            "MersenneTwister64(index={}, seeded={})",
            self.inner.index(),
            self.inner.is_seeded()
        )
    }
}
