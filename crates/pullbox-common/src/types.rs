//! Domain primitive types used across the Pullbox workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed `name[:tag]` image reference.
///
/// Bare names (no `/`) are namespaced under the registry's official
/// prefix, so `alpine` becomes `library/alpine`. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageReference {
    name: String,
    tag: String,
}

impl ImageReference {
    /// Parses an image reference of the form `name[:tag]`.
    ///
    /// An absent tag defaults to `latest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name part is empty.
    pub fn parse(input: &str) -> crate::error::Result<Self> {
        let (name, tag) = match input.split_once(':') {
            Some((name, tag)) if !tag.is_empty() => (name, tag),
            Some((name, _)) => (name, crate::constants::DEFAULT_TAG),
            None => (input, crate::constants::DEFAULT_TAG),
        };

        if name.is_empty() {
            return Err(crate::error::PullboxError::Config {
                message: format!("empty image name in reference: {input:?}"),
            });
        }

        let name = if name.contains('/') {
            name.to_string()
        } else {
            format!("{}/{name}", crate::constants::OFFICIAL_NAMESPACE)
        };

        Ok(Self {
            name,
            tag: tag.to_string(),
        })
    }

    /// Namespaced repository name, e.g. `library/alpine`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image tag, e.g. `latest`.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Registry scope string granting pull access to this repository.
    #[must_use]
    pub fn pull_scope(&self) -> String {
        format!("repository:{}:pull", self.name)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

/// Opaque bearer token authorizing registry requests.
///
/// Fetched once per pull and reused for the manifest and every blob
/// request within that pull. No expiry tracking.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as an `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens are credentials; keep them out of logs and error chains.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_and_tag() {
        let r = ImageReference::parse("alpine:3.20").expect("parse failed");
        assert_eq!(r.name(), "library/alpine");
        assert_eq!(r.tag(), "3.20");
    }

    #[test]
    fn parse_absent_tag_defaults_to_latest() {
        let r = ImageReference::parse("alpine").expect("parse failed");
        assert_eq!(r.tag(), "latest");
        assert_eq!(r, ImageReference::parse("alpine:latest").expect("parse failed"));
    }

    #[test]
    fn parse_empty_tag_defaults_to_latest() {
        let r = ImageReference::parse("alpine:").expect("parse failed");
        assert_eq!(r.tag(), "latest");
    }

    #[test]
    fn parse_keeps_explicit_namespace() {
        let r = ImageReference::parse("grafana/loki:2.9").expect("parse failed");
        assert_eq!(r.name(), "grafana/loki");
    }

    #[test]
    fn parse_empty_name_is_an_error() {
        assert!(ImageReference::parse("").is_err());
        assert!(ImageReference::parse(":latest").is_err());
    }

    #[test]
    fn pull_scope_formats_repository_grant() {
        let r = ImageReference::parse("busybox").expect("parse failed");
        assert_eq!(r.pull_scope(), "repository:library/busybox:pull");
    }

    #[test]
    fn token_debug_does_not_leak_value() {
        let t = AuthToken::new("secret");
        assert_eq!(format!("{t:?}"), "AuthToken(..)");
        assert_eq!(t.bearer(), "Bearer secret");
    }
}
