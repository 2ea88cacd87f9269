//! Entropy Sources
//!
//! Randomness is an injected capability. The game draws two things from it:
//! the computer's move index and the commitment key. Production play uses
//! the operating system CSPRNG; tests and demos swap in a seeded or scripted
//! source so a round can be replayed exactly.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use thiserror::Error;

/// Failures of an entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The underlying generator could not produce bytes.
    #[error("secure random source unavailable: {0}")]
    Unavailable(String),

    /// Asked for an index in an empty range.
    #[error("cannot pick an index from an empty range")]
    EmptyRange,

    /// A source returned an index outside the requested range.
    #[error("source picked index {index} outside [0, {n})")]
    IndexOutOfRange {
        /// Index returned.
        index: usize,
        /// Exclusive upper bound requested.
        n: usize,
    },
}

/// A source of cryptographically secure random bytes.
///
/// Implementations must never fall back to a weaker generator on failure;
/// they report [`EntropyError`] instead.
pub trait EntropySource {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Pick an index uniformly from `[0, n)`.
    fn pick_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        uniform_index(self, n)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn pick_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        (**self).pick_index(n)
    }
}

/// Draw a uniform index in `[0, n)` from raw bytes.
///
/// Uses rejection sampling so there is no modulo bias for any `n`.
pub fn uniform_index<E: EntropySource + ?Sized>(
    source: &mut E,
    n: usize,
) -> Result<usize, EntropyError> {
    if n == 0 {
        return Err(EntropyError::EmptyRange);
    }
    let n = n as u64;
    // Largest multiple of n that fits; values at or above it are redrawn.
    let zone = u64::MAX - (u64::MAX % n);

    loop {
        let mut buf = [0u8; 8];
        source.fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % n) as usize);
        }
    }
}

/// Operating system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Seeded CSPRNG (ChaCha-based `StdRng`).
///
/// Given the same seed, produces the same keys and moves. Only for tests
/// and reproducible demos: anyone who knows the seed can predict the
/// commitment key.
#[derive(Clone, Debug)]
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    /// Create a source from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Scripted source for exact scenarios.
///
/// Returns the queued indices in order (cycling), and fills key bytes with
/// a counter that advances on every call so consecutive keys differ.
#[derive(Clone, Debug)]
pub struct ScriptedEntropy {
    indices: Vec<usize>,
    cursor: usize,
    fill: u8,
}

impl ScriptedEntropy {
    /// Script the computer's moves; key bytes start at `fill`.
    pub fn new(indices: Vec<usize>, fill: u8) -> Self {
        Self {
            indices,
            cursor: 0,
            fill,
        }
    }

    /// Always pick the same index.
    pub fn fixed(index: usize) -> Self {
        Self::new(vec![index], 0x11)
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        dest.fill(self.fill);
        self.fill = self.fill.wrapping_add(1);
        Ok(())
    }

    fn pick_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        if n == 0 || self.indices.is_empty() {
            return Err(EntropyError::EmptyRange);
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        Ok(index % n)
    }
}

/// A source that always fails. Used to exercise abort paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::Unavailable("entropy source disabled".into()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
