//! Error types for the resolver.
//!
//! `ResolverError` describes everything that can go wrong while talking to the
//! law API or loading the registry. The resolution pipeline itself never
//! returns it: adapter failures are converted into a fall-through to the next
//! tier, and finally into a [`crate::types::ResolutionOutcome`].

use thiserror::Error;

/// Main error type for the resolver library.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The law API answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON.
    #[error("JSON parsing failed: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response body was not valid XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// A field required by the document schema was absent or had the wrong type.
    #[error("Missing field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// The fallback body was neither a JSON object tree nor a markup tree.
    #[error("Unrecognized document shape for law {law_id}")]
    UnknownShape { law_id: String },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResolverError {
    /// Shorthand for [`ResolverError::MissingField`].
    pub fn missing(field: &str, context: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
            context: context.to_string(),
        }
    }
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
