//! Configuration constants, environment overrides and URL builders.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ResolverError, Result};

/// Base URL of the e-Gov law API (version 1).
pub const DEFAULT_API_BASE_URL: &str = "https://elaws.e-gov.go.jp/api/1";

/// Base URL of the public e-Gov document viewer used for reference links.
pub const DEFAULT_DOCUMENT_BASE_URL: &str = "https://laws.e-gov.go.jp/document";

/// HTTP timeout in seconds.
///
/// Each request makes at most two sequential calls, and chat platforms expect a
/// reply within a short window, so this is kept well below the harvester-style
/// 30 seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default location of the law registry source.
pub const DEFAULT_LAWLIST_PATH: &str = "lawlist.json";

/// Runtime configuration for a [`crate::Resolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub api_base_url: String,
    pub document_base_url: String,
    pub timeout: Duration,
    pub lawlist_path: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            document_base_url: DEFAULT_DOCUMENT_BASE_URL.to_string(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            lawlist_path: PathBuf::from(DEFAULT_LAWLIST_PATH),
        }
    }
}

impl ResolverConfig {
    /// Build a configuration from `ROPPOU_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults. Base URLs must
    /// be http(s).
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = std::env::var("ROPPOU_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        validate_base_url("ROPPOU_API_BASE_URL", &api_base_url)?;

        let document_base_url = std::env::var("ROPPOU_DOCUMENT_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.document_base_url);
        validate_base_url("ROPPOU_DOCUMENT_BASE_URL", &document_base_url)?;

        let timeout = std::env::var("ROPPOU_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let lawlist_path = std::env::var("ROPPOU_LAWLIST")
            .map(PathBuf::from)
            .unwrap_or(defaults.lawlist_path);

        Ok(Self {
            api_base_url,
            document_base_url,
            timeout,
            lawlist_path,
        })
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_document_base_url(mut self, url: impl Into<String>) -> Self {
        self.document_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_lawlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lawlist_path = path.into();
        self
    }
}

fn validate_base_url(name: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ResolverError::Config(format!(
            "{name} must be an http(s) URL, got '{url}'"
        )))
    }
}

/// Sanitize a value before it is placed in a URL path or query.
///
/// Law ids and normalized article numbers only ever contain ASCII
/// alphanumerics and `-`; anything else is dropped.
///
/// # Examples
/// ```
/// use roppou_resolver::config::sanitize_url_component;
///
/// assert_eq!(sanitize_url_component("129AC0000000089"), "129AC0000000089");
/// assert_eq!(sanitize_url_component("89-2"), "89-2");
/// assert_eq!(sanitize_url_component("1&x=2"), "1x2");
/// assert_eq!(sanitize_url_component("89_2"), "892");
/// ```
pub fn sanitize_url_component(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Build the single-article URL.
///
/// # Examples
/// ```
/// use roppou_resolver::config::{articles_url, DEFAULT_API_BASE_URL};
///
/// assert_eq!(
///     articles_url(DEFAULT_API_BASE_URL, "129AC0000000089", "709"),
///     "https://elaws.e-gov.go.jp/api/1/articles?lawId=129AC0000000089&article=709"
/// );
/// ```
pub fn articles_url(base: &str, law_id: &str, article: &str) -> String {
    format!(
        "{base}/articles?lawId={}&article={}",
        sanitize_url_component(law_id),
        sanitize_url_component(article)
    )
}

/// Build the full-document URL.
pub fn lawdata_url(base: &str, law_id: &str) -> String {
    format!("{base}/lawdata/{}", sanitize_url_component(law_id))
}

/// Build the public reference link for a law.
pub fn document_url(base: &str, law_id: &str) -> String {
    format!("{base}?lawid={}", sanitize_url_component(law_id))
}
