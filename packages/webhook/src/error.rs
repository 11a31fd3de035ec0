use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("resolver error: {0}")]
    Resolver(#[from] roppou_resolver::ResolverError),

    #[error("reply API request failed: {0}")]
    ReplyRequest(#[from] reqwest::Error),

    #[error("reply API error (status {status}): {message}")]
    ReplyApi { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebhookError>;
