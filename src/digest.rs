//! Digest-to-password mapping.

use sha2::{Digest, Sha256};

use crate::alphabet::Alphabet;

/// Bytes in a SHA-256 digest, and so the longest password we can produce.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 of the UTF-8 bytes of `text`.
pub fn sha256(text: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Lowercase hex rendering of [`sha256`] (64 characters).
pub fn sha256_hex(text: &str) -> String {
    hex::encode(sha256(text))
}

/// Map every digest byte onto the alphabet, one character per byte.
pub fn map_digest(digest: &[u8; DIGEST_LEN], alphabet: &Alphabet) -> String {
    digest.iter().map(|&b| alphabet.select(b)).collect()
}

/// Cut a password down to `length` characters.
///
/// Never pads. A negative `length` drops that many characters from the
/// end instead, so `-4` keeps all but the last four.
pub fn truncate(password: &str, length: i64) -> String {
    let total = password.chars().count() as i64;
    let keep = if length >= 0 {
        length.min(total)
    } else {
        (total + length).max(0)
    };
    password.chars().take(keep as usize).collect()
}

/// Hash `text` and project the digest onto `alphabet`, truncated to `length`.
pub fn hash_to_password(text: &str, length: i64, alphabet: &Alphabet) -> String {
    if length > DIGEST_LEN as i64 {
        log::warn!(
            "Requested length {} exceeds the {}-byte digest; password is capped at {} characters",
            length,
            DIGEST_LEN,
            DIGEST_LEN
        );
    }
    let digest = sha256(text);
    truncate(&map_digest(&digest, alphabet), length)
}
