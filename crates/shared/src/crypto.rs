//! Hashing helpers for refresh tokens and idempotency keys.

use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Computes SHA-256 of the input and returns it as a lowercase hex string.
///
/// Used to store refresh tokens and idempotency keys without keeping the
/// original value in the database.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a random alphanumeric secret of the given length.
///
/// Used by the admin bootstrap when no initial password is configured.
pub fn random_secret(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_value() {
        let hash = sha256_hex("test");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_sha256_hex_deterministic() {
        assert_eq!(sha256_hex("same input"), sha256_hex("same input"));
    }

    #[test]
    fn test_sha256_hex_distinct_inputs() {
        assert_ne!(sha256_hex("one"), sha256_hex("two"));
    }

    #[test]
    fn test_random_secret_length() {
        assert_eq!(random_secret(24).len(), 24);
        assert_eq!(random_secret(0).len(), 0);
    }

    #[test]
    fn test_random_secret_unique() {
        assert_ne!(random_secret(32), random_secret(32));
    }

    #[test]
    fn test_random_secret_alphanumeric() {
        let secret = random_secret(64);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
