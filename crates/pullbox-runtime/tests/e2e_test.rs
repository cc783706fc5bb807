//! End-to-end launch tests.
//!
//! These exercise the real chroot + namespace path, so they need root
//! privileges and a statically linked `/bin/busybox` to survive inside
//! the bare root. They are `#[ignore]`d by default:
//!
//! ```text
//! sudo -E cargo test -p pullbox-runtime -- --ignored
//! ```

#![cfg(target_os = "linux")]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::process::Stdio;

use pullbox_runtime::{LaunchSpec, launch};

const BUSYBOX: &str = "/bin/busybox";

fn busybox_spec(script: &str) -> LaunchSpec {
    LaunchSpec::new(
        BUSYBOX,
        vec!["sh".into(), "-c".into(), script.into()],
    )
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn clean_exit_propagates_zero() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let code = launch(busybox_spec("exit 0"), root.path()).expect("launch failed");
    assert_eq!(code, 0);
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn nonzero_exit_propagates_without_error() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let code = launch(busybox_spec("exit 7"), root.path()).expect("launch failed");
    assert_eq!(code, 7);
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn stdout_forwarding_survives_output_larger_than_any_buffer() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let out_path = root.path().join("captured-stdout");
    let out = std::fs::File::create(&out_path).expect("failed to create capture file");

    // 20k lines of 41 bytes — far past any single pipe or stdio buffer.
    let mut spec = busybox_spec(
        "i=0; while [ $i -lt 20000 ]; do \
         echo 0123456789012345678901234567890123456789; \
         i=$((i+1)); done",
    );
    spec.stdout = Stdio::from(out);

    let code = launch(spec, root.path()).expect("launch failed");
    assert_eq!(code, 0);

    let captured = std::fs::read(&out_path).expect("read failed");
    assert_eq!(captured.len(), 20_000 * 41);
    assert!(captured.starts_with(b"0123456789"));
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn launched_command_is_pid_one_in_its_namespace() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let out_path = root.path().join("captured-stdout");
    let out = std::fs::File::create(&out_path).expect("failed to create capture file");

    let mut spec = busybox_spec("echo $$");
    spec.stdout = Stdio::from(out);

    let code = launch(spec, root.path()).expect("launch failed");
    assert_eq!(code, 0);

    let pid = std::fs::read_to_string(&out_path).expect("read failed");
    assert_eq!(pid.trim(), "1");
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn uts_namespace_gets_the_configured_hostname() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let out_path = root.path().join("captured-stdout");
    let out = std::fs::File::create(&out_path).expect("failed to create capture file");

    let mut spec = busybox_spec("hostname");
    spec.hostname = Some("boxed".into());
    spec.stdout = Stdio::from(out);

    let code = launch(spec, root.path()).expect("launch failed");
    assert_eq!(code, 0);

    let hostname = std::fs::read_to_string(&out_path).expect("read failed");
    assert_eq!(hostname.trim(), "boxed");
}

#[test]
#[ignore = "requires root and a static /bin/busybox"]
fn filesystem_view_is_restricted_to_the_root() {
    let root = tempfile::tempdir().expect("failed to create tempdir");
    let out_path = root.path().join("captured-stdout");
    let out = std::fs::File::create(&out_path).expect("failed to create capture file");

    let mut spec = busybox_spec("ls /");
    spec.stdout = Stdio::from(out);

    let code = launch(spec, root.path()).expect("launch failed");
    assert_eq!(code, 0);

    // Only the staged binary's tree and the capture file exist inside.
    let listing = std::fs::read_to_string(&out_path).expect("read failed");
    let entries: Vec<_> = listing.split_whitespace().collect();
    assert!(entries.contains(&"bin"));
    assert!(!entries.contains(&"proc"));
    assert!(!entries.contains(&"etc"));
}
