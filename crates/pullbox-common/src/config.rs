//! Registry endpoint configuration.

use serde::{Deserialize, Serialize};

/// Endpoints of the registry a pull talks to.
///
/// An explicit value owned by the fetcher and threaded through every
/// call; never read from ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Token service URL, including the `service` query parameter.
    pub auth_endpoint: String,
    /// Registry API root, up to and including the version segment.
    pub registry_endpoint: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: crate::constants::DEFAULT_AUTH_ENDPOINT.to_string(),
            registry_endpoint: crate::constants::DEFAULT_REGISTRY_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_docker_hub() {
        let config = RegistryConfig::default();
        assert!(config.auth_endpoint.starts_with("https://auth.docker.io/token"));
        assert!(config.registry_endpoint.ends_with("/v2"));
    }
}
