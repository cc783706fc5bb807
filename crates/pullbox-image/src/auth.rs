//! Anonymous bearer-token exchange with the registry's token service.

use pullbox_common::types::{AuthToken, ImageReference};
use serde::Deserialize;

use crate::error::PullError;

/// Wire shape of the token service response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Exchanges a repository's pull scope for a bearer token.
///
/// No credentials are supplied; the registry grants an anonymous pull
/// token. A transient failure aborts the whole pull — there are no
/// retries.
///
/// # Errors
///
/// Returns `PullError::Auth` if the request fails, the service answers
/// with an error status, or the body cannot be decoded.
pub fn fetch_token(
    http: &reqwest::blocking::Client,
    reference: &ImageReference,
    auth_endpoint: &str,
) -> Result<AuthToken, PullError> {
    let url = token_url(auth_endpoint, reference);
    tracing::debug!(reference = %reference, "requesting pull token");

    let body: TokenResponse = http
        .get(&url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::json)
        .map_err(|source| PullError::Auth { source })?;

    tracing::debug!(reference = %reference, "pull token acquired");
    Ok(AuthToken::new(body.token))
}

/// Appends the pull scope to the endpoint, starting the query string
/// if the endpoint carries none.
fn token_url(auth_endpoint: &str, reference: &ImageReference) -> String {
    let separator = if auth_endpoint.contains('?') { '&' } else { '?' };
    format!("{auth_endpoint}{separator}scope={}", reference.pull_scope())
}
