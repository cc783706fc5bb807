//! # pullbox-runtime
//!
//! Process isolation for the Pullbox runtime.
//!
//! Stages the target executable into a prepared root directory, then
//! launches it chrooted into that root with fresh UTS and PID
//! namespaces, forwarding stdio and the exit status to the caller.
//!
//! The unsafe `pre_exec` hook is the only unsafe surface; it makes
//! direct syscalls between fork and exec.

#![allow(unsafe_code)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod error;
pub mod launch;
pub mod namespace;
pub mod stage;

pub use error::LaunchError;
pub use launch::{LaunchSpec, launch};
pub use namespace::NamespaceConfig;
pub use stage::{resolve_program, stage_executable};
