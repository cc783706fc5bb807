//! Isolated process launch.
//!
//! The launch moves through: staging the executable, preparing the
//! namespace/chroot setup in the pre-exec hook, running the child to
//! completion, and mapping its wait status to an exit code. Terminal
//! outcomes are the child's exit code or a `LaunchError`; there is no
//! retry path.

use std::path::Path;
use std::process::Stdio;

use crate::error::LaunchError;
use crate::namespace::NamespaceConfig;

/// One-shot description of the process to run inside the root.
///
/// Stdin is always inherited from the caller; stdout and stderr are
/// forwarded unmodified to the given handles.
#[derive(Debug)]
pub struct LaunchSpec {
    /// Program to execute, as the caller expects to address it inside
    /// the container (absolute path or bare name resolved on the host).
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Hostname inside the UTS namespace, if any.
    pub hostname: Option<String>,
    /// Namespaces to create for the child.
    pub namespaces: NamespaceConfig,
    /// Where the child's stdout goes.
    pub stdout: Stdio,
    /// Where the child's stderr goes.
    pub stderr: Stdio,
}

impl LaunchSpec {
    /// Creates a spec with default isolation and inherited stdio.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            hostname: None,
            namespaces: NamespaceConfig::default(),
            stdout: Stdio::inherit(),
            stderr: Stdio::inherit(),
        }
    }
}

/// Stages the executable into `root` and runs it there, isolated.
///
/// Blocks until the child exits. A non-zero child exit is a normal
/// outcome and is returned as the code; a child killed by signal `n`
/// maps to `128 + n`.
///
/// # Errors
///
/// Returns `LaunchError` if resolution, staging, namespace or chroot
/// setup, or the spawn/wait itself fails. No exit code is produced in
/// that case.
#[cfg(target_os = "linux")]
pub fn launch(spec: LaunchSpec, root: &Path) -> Result<i32, LaunchError> {
    use std::os::unix::process::CommandExt;

    let host_path = crate::stage::resolve_program(&spec.program)?;
    let staged = crate::stage::stage_executable(&host_path, root)?;
    tracing::debug!(staged = %staged.display(), "executable staged");

    let mut command = std::process::Command::new(&host_path);
    let _ = command
        .args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(spec.stdout)
        .stderr(spec.stderr);

    let namespaces = spec.namespaces;
    let hostname = spec.hostname;
    let root = root.to_path_buf();

    // unshare(2) leaves this process in its own namespace; the child
    // spawned next is the first fork afterward and so starts as PID 1.
    if namespaces.pid {
        crate::namespace::prepare_pid_namespace()
            .map_err(|source| LaunchError::Namespace { source })?;
    }

    // SAFETY: the hook runs in the forked child between fork and exec
    // and makes only direct syscalls (unshare, sethostname, chroot,
    // chdir); any failure is reported back through the spawn result.
    unsafe {
        let _ = command.pre_exec(move || {
            crate::namespace::enter(namespaces, hostname.as_deref())?;
            nix::unistd::chroot(root.as_path())
                .map_err(|e| std::io::Error::from_raw_os_error(e as i32))?;
            nix::unistd::chdir("/").map_err(|e| std::io::Error::from_raw_os_error(e as i32))?;
            Ok(())
        });
    }

    tracing::debug!(program = %spec.program, "spawning isolated child");
    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: spec.program.clone(),
        source,
    })?;
    tracing::debug!(pid = child.id(), "child running");

    let status = child
        .wait()
        .map_err(|source| LaunchError::Wait { source })?;
    let code = exit_code_of(status);
    tracing::info!(code, "child exited");
    Ok(code)
}

/// Stub for non-Linux platforms.
///
/// # Errors
///
/// Always returns `LaunchError::Unsupported` — chroot and namespace
/// isolation require Linux.
#[cfg(not(target_os = "linux"))]
pub fn launch(_spec: LaunchSpec, _root: &Path) -> Result<i32, LaunchError> {
    Err(LaunchError::Unsupported {
        message: "chroot and namespace isolation require Linux",
    })
}

/// Maps a wait status to the exit code reported to the caller.
///
/// Signal deaths follow the shell convention of `128 + signo`.
#[cfg(unix)]
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signo| 128 + signo))
        .unwrap_or(1)
}
