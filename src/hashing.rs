//! Hashing - SHA-256 digests for written files
//!
//! Reports carry a digest per file so two runs can be compared byte for byte.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
