//! Keyed Hashing
//!
//! HMAC-SHA256 over move names. This is the MAC behind every published
//! commitment digest.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

/// MAC output type (256 bits / 32 bytes)
pub type MacDigest = [u8; 32];

type HmacSha256 = Hmac<Sha256>;

/// MAC computation errors.
#[derive(Debug, Error)]
pub enum MacError {
    /// The key was rejected by the MAC construction.
    #[error("invalid MAC key length")]
    InvalidKeyLength,
}

impl From<hmac::digest::InvalidLength> for MacError {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Self::InvalidKeyLength
    }
}

fn keyed(key: &[u8], message: &[u8]) -> Result<HmacSha256, MacError> {
    let mut mac = HmacSha256::new_from_slice(key)?;
    mac.update(message);
    Ok(mac)
}

/// Compute `HMAC-SHA256(key, message)`.
pub fn compute_mac(key: &[u8], message: &[u8]) -> Result<MacDigest, MacError> {
    Ok(keyed(key, message)?.finalize().into_bytes().into())
}

/// Compute the MAC as a lowercase hex string.
pub fn mac_hex(key: &[u8], message: &[u8]) -> Result<String, MacError> {
    compute_mac(key, message).map(hex::encode)
}

/// Check a MAC in constant time.
pub fn verify_mac(key: &[u8], message: &[u8], expected: &[u8]) -> Result<bool, MacError> {
    Ok(keyed(key, message)?.verify_slice(expected).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_case_2() {
        // RFC 4231 test case 2.
        let digest = mac_hex(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hex_is_lowercase_64_chars() {
        let digest = mac_hex(&[7u8; 32], b"rock").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_verify_mac() {
        let key = [3u8; 32];
        let digest = compute_mac(&key, b"paper").unwrap();

        assert!(verify_mac(&key, b"paper", &digest).unwrap());
        assert!(!verify_mac(&key, b"rock", &digest).unwrap());
        assert!(!verify_mac(&[4u8; 32], b"paper", &digest).unwrap());
        assert!(!verify_mac(&key, b"paper", &digest[..16]).unwrap());
    }
}
