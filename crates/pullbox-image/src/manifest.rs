//! Typed image manifest fetching and decoding.
//!
//! The registry answers with a flat v1-style manifest whose `fsLayers`
//! list the image's blobs base-first. Layer order is significant:
//! extraction applies them in exactly this order. All identity metadata
//! is optional and decoded as `Option` rather than ignored on absence.

use pullbox_common::types::{AuthToken, ImageReference};
use serde::Deserialize;

use crate::error::PullError;

/// A single layer entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FsLayer {
    /// Content digest addressing the layer blob, e.g. `sha256:<hex>`.
    #[serde(rename = "blobSum")]
    pub blob_sum: String,
}

/// An image manifest: identity metadata plus the ordered layer list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Manifest schema version; not validated.
    #[serde(default)]
    pub schema_version: Option<u64>,
    /// Repository name as reported by the registry.
    #[serde(default)]
    pub name: Option<String>,
    /// Tag as reported by the registry.
    #[serde(default)]
    pub tag: Option<String>,
    /// Target architecture; informational only.
    #[serde(default)]
    pub architecture: Option<String>,
    /// Ordered layer list, base layer first.
    #[serde(default)]
    pub fs_layers: Vec<FsLayer>,
}

/// Fetches and decodes the manifest for an image reference.
///
/// Single flat manifests only — multi-arch manifest lists are not
/// reconciled.
///
/// # Errors
///
/// Returns `PullError::Manifest` on transport failure, an error status,
/// or a body that does not decode into the manifest shape.
pub fn fetch_manifest(
    http: &reqwest::blocking::Client,
    reference: &ImageReference,
    token: &AuthToken,
    registry_endpoint: &str,
) -> Result<Manifest, PullError> {
    let url = format!(
        "{registry_endpoint}/{}/manifests/{}",
        reference.name(),
        reference.tag()
    );
    tracing::debug!(reference = %reference, "fetching manifest");

    let manifest: Manifest = http
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, token.bearer())
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::json)
        .map_err(|source| PullError::Manifest {
            reference: reference.to_string(),
            source,
        })?;

    tracing::debug!(
        reference = %reference,
        layers = manifest.fs_layers.len(),
        architecture = manifest.architecture.as_deref().unwrap_or("unknown"),
        "manifest decoded"
    );
    Ok(manifest)
}
