//! Fairness Proof
//!
//! The commit-reveal scheme that lets a player check the computer did not
//! change its move after seeing theirs.
//!
//! ```text
//! round start   key <- CSPRNG, publish HMAC-SHA256(key, computer_move)
//! player moves  choice locked in
//! round end     reveal key; player recomputes the MAC and compares
//! ```

pub mod commitment;

pub use commitment::{verify, Commitment, CommitmentError, RevealedKey, KEY_LEN};
