//! Move Commitment Protocol
//!
//! Commit to the computer's move before the player chooses.
//! Reveal the key after the player's move is locked in so the player can
//! recompute the MAC and check the move was never changed.

use std::fmt;

use thiserror::Error;

use crate::core::hash::{compute_mac, verify_mac, MacDigest, MacError};
use crate::core::rng::{EntropyError, EntropySource};

/// Default secret key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Smallest accepted key length in bytes.
pub const MIN_KEY_LEN: usize = 32;

/// Largest accepted key length in bytes (one SHA-256 block).
pub const MAX_KEY_LEN: usize = 64;

/// Errors raised while building a commitment.
///
/// All of these abort the round; there is no weaker fallback.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// Secure random source failed.
    #[error("key generation failed: {0}")]
    Entropy(#[from] EntropyError),

    /// MAC computation failed.
    #[error("MAC computation failed: {0}")]
    Mac(#[from] MacError),

    /// Requested key length is outside the accepted range.
    #[error("key length {len} is outside [{min}, {max}] bytes")]
    InvalidKeyLength {
        /// Requested length.
        len: usize,
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },
}

/// Secret key bytes, wiped on drop.
struct SecretKey(Vec<u8>);

impl SecretKey {
    fn generate<E: EntropySource + ?Sized>(
        len: usize,
        entropy: &mut E,
    ) -> Result<Self, CommitmentError> {
        if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&len) {
            return Err(CommitmentError::InvalidKeyLength {
                len,
                min: MIN_KEY_LEN,
                max: MAX_KEY_LEN,
            });
        }
        let mut key = SecretKey(vec![0u8; len]);
        entropy.fill_bytes(&mut key.0)?;
        Ok(key)
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.fill(0);
        std::hint::black_box(&self.0);
    }
}

/// A published commitment to one message.
///
/// The digest is public from construction on. The key can only be
/// obtained by consuming the commitment with [`Commitment::reveal`].
pub struct Commitment {
    key: SecretKey,
    digest: MacDigest,
}

impl Commitment {
    /// Commit to `message` with a fresh [`KEY_LEN`]-byte key.
    pub fn commit<E: EntropySource + ?Sized>(
        message: &str,
        entropy: &mut E,
    ) -> Result<Self, CommitmentError> {
        Self::commit_with_key_len(message, KEY_LEN, entropy)
    }

    /// Commit to `message` with a fresh key of `key_len` bytes.
    pub fn commit_with_key_len<E: EntropySource + ?Sized>(
        message: &str,
        key_len: usize,
        entropy: &mut E,
    ) -> Result<Self, CommitmentError> {
        let key = SecretKey::generate(key_len, entropy)?;
        let digest = compute_mac(&key.0, message.as_bytes())?;
        Ok(Self { key, digest })
    }

    /// Digest as lowercase hex. This is what gets published.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Disclose the key. Only call once the counterpart's choice is fixed.
    pub fn reveal(self) -> RevealedKey {
        RevealedKey { key: self.key }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest_hex())
            .field("key", &"<sealed>")
            .finish()
    }
}

/// A key disclosed after the round resolved.
pub struct RevealedKey {
    key: SecretKey,
}

impl RevealedKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key.0
    }

    /// Key as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.key.0)
    }

    /// Check this key against a published digest and announced message.
    pub fn verify(&self, message: &str, digest_hex: &str) -> bool {
        verify(&self.key.0, message, digest_hex)
    }
}

impl fmt::Debug for RevealedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevealedKey").field(&self.to_hex()).finish()
    }
}

/// Recompute `HMAC(key, message)` and compare with `digest_hex`.
///
/// This is what a player runs after the reveal. Malformed hex never
/// verifies.
pub fn verify(key: &[u8], message: &str, digest_hex: &str) -> bool {
    let Ok(expected) = hex::decode(digest_hex.trim()) else {
        return false;
    };
    verify_mac(key, message.as_bytes(), &expected).unwrap_or(false)
}
