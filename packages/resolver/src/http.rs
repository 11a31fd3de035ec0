//! HTTP client wrapper for the e-Gov law API.
//!
//! Every call is a single attempt bounded by the client timeout. There is no
//! retry loop here: the only recovery step is the resolver's primary to
//! fallback tier switch.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;

use crate::error::{ResolverError, Result};

/// User agent string identifying this resolver.
const USER_AGENT: &str = concat!("roppou-resolver/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with the given timeout and user agent.
pub fn create_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET a URL, optionally asking for JSON, and return the body as text.
///
/// Non-success statuses become [`ResolverError::Status`].
pub fn get_text(client: &Client, url: &str, accept_json: bool) -> Result<String> {
    let mut request: RequestBuilder = client.get(url);
    if accept_json {
        request = request.header(ACCEPT, "application/json");
    }

    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = %status, url, "Non-success response");
        return Err(ResolverError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes()?;
    Ok(bytes_to_string(&bytes, url))
}

/// Decode a response body as UTF-8, replacing invalid sequences.
///
/// Logs a warning when replacement happened so corrupted payloads are visible.
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            tracing::warn!(context, "Response body is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
