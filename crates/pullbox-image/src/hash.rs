//! SHA-256 content verification for downloaded layer blobs.

use std::io::Read;
use std::path::Path;

use pullbox_common::constants::SHA256_PREFIX;
use pullbox_common::error::{PullboxError, Result};
use sha2::{Digest, Sha256};

/// Computes the hex-encoded SHA-256 of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path).map_err(|e| PullboxError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let read = file
            .read(&mut buffer)
            .map_err(|e| PullboxError::io(path, e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Validates a file against a registry digest string.
///
/// Digests without a `sha256:` prefix use an algorithm this runtime
/// does not compute; they pass through unverified.
///
/// # Errors
///
/// Returns `PullboxError::HashMismatch` if the computed hash differs
/// from the digest, or an I/O error if the file cannot be read.
pub fn verify_digest(path: &Path, digest: &str) -> Result<()> {
    let Some(expected) = digest.strip_prefix(SHA256_PREFIX) else {
        tracing::debug!(digest, "skipping verification of non-sha256 digest");
        return Ok(());
    };

    let actual = sha256_file(path)?;
    if actual != expected {
        return Err(PullboxError::HashMismatch {
            resource: digest.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
