//! System-wide constants and default endpoints.

/// Default token service for anonymous pulls from Docker Hub.
///
/// The `service` query parameter is part of the endpoint; the pull
/// scope is appended per request.
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://auth.docker.io/token?service=registry.docker.io";

/// Default registry API root (v2) for Docker Hub.
pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://registry.hub.docker.com/v2";

/// Tag assumed when an image reference carries none.
pub const DEFAULT_TAG: &str = "latest";

/// Namespace prefix applied to bare repository names.
pub const OFFICIAL_NAMESPACE: &str = "library";

/// Digest prefix for SHA-256 addressed blobs.
pub const SHA256_PREFIX: &str = "sha256:";

/// SHA-256 digest length in hex characters.
pub const SHA256_HEX_LENGTH: usize = 64;

/// Application name used in CLI output and temp directory prefixes.
pub const APP_NAME: &str = "pullbox";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "pbx";

/// Exit code reported when the pull or launch itself fails, distinct
/// from any code the in-container command can produce via the CLI.
pub const FRONTEND_FAILURE_CODE: i32 = 125;
