//! Snapshot - Capture/Restore Generator Position
//!
//! A snapshot is a raw copy of the generator's in-memory state: the state
//! vector, the cursor and the seeded flag. Restoring it yields a generator
//! that continues the exact same sequence.
//!
//! No storage format is defined here. The snapshot derives serde traits so
//! callers can pick whichever format they already use.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restored generator draws identically to the original
//! - **Completeness**: state vector must hold exactly 312 words
//! - **Cursor bounds**: index never exceeds 312

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::{MersenneTwister64, STATE_WORDS};

/// Errors raised when a snapshot cannot be turned back into a generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("State vector has {actual} words, expected {expected}")]
    StateLength { expected: usize, actual: usize },

    #[error("Cursor {index} out of range (max {max})")]
    IndexOutOfRange { index: usize, max: usize },
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// State vector words, in order
    pub state: Vec<u64>,

    /// Next word to read
    pub index: usize,

    /// Whether a seed had been applied
    pub seeded: bool,
}

impl GeneratorSnapshot {
    /// SHA-256 over the state words, cursor and seeded flag (lowercase hex)
    ///
    /// Two generators at the same sequence position have the same
    /// fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.state {
            hasher.update(word.to_le_bytes());
        }
        hasher.update((self.index as u64).to_le_bytes());
        hasher.update([self.seeded as u8]);
        let result = hasher.finalize();

        format!("{:x}", result)
    }
}

impl From<&MersenneTwister64> for GeneratorSnapshot {
    fn from(rng: &MersenneTwister64) -> Self {
        GeneratorSnapshot {
            state: rng.state().to_vec(),
            index: rng.index(),
            seeded: rng.is_seeded(),
        }
    }
}

impl TryFrom<&GeneratorSnapshot> for MersenneTwister64 {
    type Error = SnapshotError;

    fn try_from(snapshot: &GeneratorSnapshot) -> Result<Self, Self::Error> {
        validate_snapshot(snapshot)?;

        let mut state = [0u64; STATE_WORDS];
        state.copy_from_slice(&snapshot.state);

        Ok(MersenneTwister64::from_parts(
            state,
            snapshot.index,
            snapshot.seeded,
        ))
    }
}

impl MersenneTwister64 {
    /// Capture the current position
    ///
    /// # Example
    /// ```
    /// use mt19937_64::MersenneTwister64;
    ///
    /// let mut rng = MersenneTwister64::with_seed(7);
    /// rng.next_u64();
    ///
    /// let snapshot = rng.snapshot();
    /// let mut resumed = MersenneTwister64::restore(&snapshot).unwrap();
    /// assert_eq!(rng.next_u64(), resumed.next_u64());
    /// ```
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot::from(self)
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// - `StateLength` if the state vector is not exactly 312 words
    /// - `IndexOutOfRange` if the cursor is past the end of the vector
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, SnapshotError> {
        MersenneTwister64::try_from(snapshot)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot shape before restoring
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<(), SnapshotError> {
    if snapshot.state.len() != STATE_WORDS {
        return Err(SnapshotError::StateLength {
            expected: STATE_WORDS,
            actual: snapshot.state.len(),
        });
    }

    if snapshot.index > STATE_WORDS {
        return Err(SnapshotError::IndexOutOfRange {
            index: snapshot.index,
            max: STATE_WORDS,
        });
    }

    Ok(())
}
