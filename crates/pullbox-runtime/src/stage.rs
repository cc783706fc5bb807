//! Executable staging into the isolated root.
//!
//! The binary is copied to the same path under the root that it has on
//! the host, so the caller-specified path still resolves after the root
//! change.

use std::path::{Path, PathBuf};

use crate::error::LaunchError;

/// Resolves a program name to a host filesystem path.
///
/// Paths containing a separator are taken as-is; bare names are looked
/// up on the host `PATH`.
///
/// # Errors
///
/// Returns `LaunchError::Resolve` if a bare name is not on `PATH`.
pub fn resolve_program(program: &str) -> Result<PathBuf, LaunchError> {
    if program.contains('/') {
        return Ok(PathBuf::from(program));
    }
    let resolved = which::which(program).map_err(|source| LaunchError::Resolve {
        program: program.to_string(),
        source,
    })?;
    tracing::debug!(program, resolved = %resolved.display(), "resolved program on host PATH");
    Ok(resolved)
}

/// Copies the executable into the root, mirroring its host path.
///
/// Parent directories are created recursively; permission bits are
/// preserved by the copy. Returns the staged path.
///
/// # Errors
///
/// Returns `LaunchError::Stage` if directory creation or the copy
/// fails.
pub fn stage_executable(host_path: &Path, root: &Path) -> Result<PathBuf, LaunchError> {
    let relative = host_path.strip_prefix("/").unwrap_or(host_path);
    let staged = root.join(relative);

    if let Some(parent) = staged.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LaunchError::Stage {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let _ = std::fs::copy(host_path, &staged).map_err(|source| LaunchError::Stage {
        path: staged.clone(),
        source,
    })?;

    tracing::debug!(
        from = %host_path.display(),
        to = %staged.display(),
        "staged executable"
    );
    Ok(staged)
}
