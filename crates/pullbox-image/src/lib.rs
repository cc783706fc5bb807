//! # pullbox-image
//!
//! Registry image fetching for the Pullbox runtime.
//!
//! Handles:
//! - **Auth**: anonymous bearer-token exchange with the token service.
//! - **Manifests**: typed decoding of the image's ordered layer list.
//! - **Layers**: blob download, digest verification, and in-process
//!   gzip-tar extraction into a target root, in manifest order.
//! - **Pull**: the token → manifest → layers orchestration.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod auth;
pub mod error;
pub mod hash;
pub mod layer;
pub mod manifest;
pub mod pull;

pub use error::{LayerError, PullError};
pub use manifest::{FsLayer, Manifest};
pub use pull::RegistryClient;
