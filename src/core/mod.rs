//! Core primitives.
//!
//! Entropy and keyed hashing. Nothing here knows about moves or rounds.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{compute_mac, mac_hex, verify_mac, MacDigest, MacError};
pub use rng::{EntropyError, EntropySource, OsEntropy, ScriptedEntropy, SeededEntropy};
