//! Pull orchestration: token → manifest → layers.

use std::path::Path;

use pullbox_common::config::RegistryConfig;
use pullbox_common::types::ImageReference;

use crate::error::PullError;

/// Client for pulling one image from a registry.
///
/// Owns its endpoints explicitly; nothing is read from ambient process
/// state. A fresh token is acquired per `pull` call and reused for the
/// manifest and every blob request within it.
#[derive(Debug)]
pub struct RegistryClient {
    http: reqwest::blocking::Client,
    reference: ImageReference,
    config: RegistryConfig,
}

impl RegistryClient {
    /// Creates a client for the given image reference and registry.
    #[must_use]
    pub fn new(reference: ImageReference, config: RegistryConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            reference,
            config,
        }
    }

    /// Pulls the image's filesystem into `root`.
    ///
    /// Layers are downloaded and extracted sequentially in manifest
    /// order, each overlaying earlier ones. The root must already exist
    /// and be writable.
    ///
    /// # Errors
    ///
    /// Returns the first stage error encountered. A layer failure
    /// aborts the remaining layers and leaves the already-extracted
    /// ones on disk — there is no rollback.
    pub fn pull(&self, root: &Path) -> Result<(), PullError> {
        tracing::info!(reference = %self.reference, root = %root.display(), "pulling image");

        let token = crate::auth::fetch_token(&self.http, &self.reference, &self.config.auth_endpoint)?;
        let manifest = crate::manifest::fetch_manifest(
            &self.http,
            &self.reference,
            &token,
            &self.config.registry_endpoint,
        )?;

        for (index, layer) in manifest.fs_layers.iter().enumerate() {
            tracing::info!(
                digest = %layer.blob_sum,
                layer = index + 1,
                of = manifest.fs_layers.len(),
                "fetching layer"
            );
            crate::layer::fetch_layer(
                &self.http,
                &self.reference,
                &token,
                &layer.blob_sum,
                &self.config.registry_endpoint,
                root,
            )
            .map_err(|source| PullError::Layer {
                digest: layer.blob_sum.clone(),
                source,
            })?;
        }

        tracing::info!(reference = %self.reference, "image pulled");
        Ok(())
    }
}
