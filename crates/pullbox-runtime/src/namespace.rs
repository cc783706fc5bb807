//! Namespace setup for the isolated child.
//!
//! PID isolation uses `unshare(2)` in the launching process: unshare
//! does not move the caller, but the next forked child starts as PID 1
//! inside the new namespace, which is exactly the spawn that follows.
//! UTS isolation happens in the pre-exec hook of that child, where the
//! container hostname is also applied.

/// Which namespaces to create for the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceConfig {
    /// Isolate UTS (hostname) namespace.
    pub uts: bool,
    /// Isolate PID (process-number) namespace.
    pub pid: bool,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            uts: true,
            pid: true,
        }
    }
}

#[cfg(target_os = "linux")]
fn errno_to_io(errno: nix::errno::Errno) -> std::io::Error {
    std::io::Error::from_raw_os_error(errno as i32)
}

/// Creates the PID namespace the next forked child will join as PID 1.
///
/// Must run in the launching process immediately before the spawn; it
/// changes which namespace future children of this process land in,
/// not the process itself.
#[cfg(target_os = "linux")]
pub(crate) fn prepare_pid_namespace() -> std::io::Result<()> {
    use nix::sched::{CloneFlags, unshare};

    unshare(CloneFlags::CLONE_NEWPID).map_err(errno_to_io)?;
    tracing::debug!("PID namespace created");
    Ok(())
}

/// Unshares the UTS namespace and applies the hostname.
///
/// Runs in the forked child before exec; only returns `io::Error` so
/// the failure surfaces through the spawn result.
#[cfg(target_os = "linux")]
pub(crate) fn enter(config: NamespaceConfig, hostname: Option<&str>) -> std::io::Result<()> {
    use nix::sched::{CloneFlags, unshare};

    if config.uts {
        unshare(CloneFlags::CLONE_NEWUTS).map_err(errno_to_io)?;
        if let Some(hostname) = hostname {
            nix::unistd::sethostname(hostname).map_err(errno_to_io)?;
        }
    }
    Ok(())
}
