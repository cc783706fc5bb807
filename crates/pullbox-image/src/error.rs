//! Pull-stage error types.
//!
//! Each variant names the stage that failed so a pull error can be
//! diagnosed without re-running. A layer failure additionally carries
//! the digest of the layer that broke the pull.

use std::path::PathBuf;

use pullbox_common::error::PullboxError;
use thiserror::Error;

/// Terminal error of a `pull` invocation.
#[derive(Debug, Error)]
pub enum PullError {
    /// Token acquisition failed; no registry request was attempted.
    #[error("token acquisition failed: {source}")]
    Auth {
        /// Underlying transport or decode failure.
        #[source]
        source: reqwest::Error,
    },

    /// Manifest fetch or decode failed.
    #[error("manifest fetch failed for {reference}: {source}")]
    Manifest {
        /// Reference whose manifest was requested.
        reference: String,
        /// Underlying transport or decode failure.
        #[source]
        source: reqwest::Error,
    },

    /// A specific layer failed to download, verify, or extract.
    ///
    /// Earlier layers remain extracted on disk; later layers were not
    /// attempted.
    #[error("layer {digest}: {source}")]
    Layer {
        /// Digest of the failing layer.
        digest: String,
        /// What went wrong with it.
        #[source]
        source: LayerError,
    },
}

/// Failure modes of a single layer fetch.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The blob request itself failed.
    #[error("blob request failed: {0}")]
    Download(#[from] reqwest::Error),

    /// The blob body could not be written to its temporary file.
    #[error("failed to store blob at {path}: {source}")]
    Store {
        /// Temporary archive path inside the target root.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The downloaded bytes did not match the manifest digest.
    #[error("digest verification failed: {0}")]
    Verify(#[source] PullboxError),

    /// The archive could not be extracted into the target root.
    #[error("archive extraction failed: {0}")]
    Extract(#[source] PullboxError),
}
