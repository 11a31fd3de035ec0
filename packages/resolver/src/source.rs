//! Law data sources.
//!
//! A [`LawSource`] performs the two external calls the resolver can make: the
//! single-article request and the full-document request. [`HttpLawSource`]
//! talks to the e-Gov law API; tests substitute in-memory sources.

use reqwest::blocking::Client;

use crate::config::{articles_url, lawdata_url, ResolverConfig};
use crate::error::Result;
use crate::http::{create_client, get_text};
use crate::numeral::ArticleNumber;

/// Trait for law data source implementations.
pub trait LawSource: Send + Sync {
    /// Fetch the single-article response body for `(law_id, article)`.
    fn fetch_article(&self, law_id: &str, article: &ArticleNumber) -> Result<String>;

    /// Fetch the full-document response body for `law_id`.
    fn fetch_law(&self, law_id: &str) -> Result<String>;
}

/// e-Gov law API over blocking HTTP.
#[derive(Debug, Clone)]
pub struct HttpLawSource {
    client: Client,
    api_base_url: String,
}

impl HttpLawSource {
    /// Create a source using the configured base URL and timeout.
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config.timeout)?,
            api_base_url: config.api_base_url.clone(),
        })
    }
}

impl LawSource for HttpLawSource {
    fn fetch_article(&self, law_id: &str, article: &ArticleNumber) -> Result<String> {
        let url = articles_url(&self.api_base_url, law_id, &article.canonical());
        tracing::debug!(url = %url, "Fetching article");
        get_text(&self.client, &url, false)
    }

    fn fetch_law(&self, law_id: &str) -> Result<String> {
        let url = lawdata_url(&self.api_base_url, law_id);
        tracing::debug!(url = %url, "Fetching full law document");
        get_text(&self.client, &url, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_from_default_config() {
        let source = HttpLawSource::new(&ResolverConfig::default()).unwrap();
        assert_eq!(source.api_base_url, "https://elaws.e-gov.go.jp/api/1");
    }
}
