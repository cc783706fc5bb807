//! Launch-stage error types.
//!
//! A child that ran and exited — with any status — is not an error;
//! these variants cover only failures to get the child running.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to stage or start the isolated process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program name could not be resolved on the host `PATH`.
    #[error("program {program} not found on host PATH: {source}")]
    Resolve {
        /// Program name as given by the caller.
        program: String,
        /// Underlying lookup failure.
        #[source]
        source: which::Error,
    },

    /// Copying the executable into the root failed.
    #[error("failed to stage executable at {path}: {source}")]
    Stage {
        /// Path inside the root that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Creating the PID namespace in the launching process failed.
    #[error("failed to create PID namespace: {source}")]
    Namespace {
        /// Underlying syscall failure.
        source: std::io::Error,
    },

    /// Spawning the child failed, including UTS or chroot setup denied
    /// in the pre-exec hook.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program the child should have executed.
        program: String,
        /// Underlying spawn failure.
        source: std::io::Error,
    },

    /// Waiting on the running child failed.
    #[error("failed to wait for child: {source}")]
    Wait {
        /// Underlying wait failure.
        source: std::io::Error,
    },

    /// This platform cannot perform the isolation.
    #[error("isolated launch is unsupported on this platform: {message}")]
    Unsupported {
        /// What is missing.
        message: &'static str,
    },
}
