use roppou_resolver::ResolverConfig;

use crate::error::{Result, WebhookError};

pub const DEFAULT_REPLY_API_URL: &str = "https://api.line.me/v2/bot/message/reply";

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub reply_api_url: String,
    pub port: u16,
    pub resolver: ResolverConfig,
}

impl WebhookConfig {
    pub fn from_env() -> Result<Self> {
        let channel_access_token = std::env::var("LINE_CHANNEL_ACCESS_TOKEN")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| WebhookError::Config("LINE_CHANNEL_ACCESS_TOKEN not set".into()))?;

        let channel_secret = std::env::var("LINE_CHANNEL_SECRET")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| WebhookError::Config("LINE_CHANNEL_SECRET not set".into()))?;

        let reply_api_url = std::env::var("LINE_REPLY_API_URL")
            .unwrap_or_else(|_| DEFAULT_REPLY_API_URL.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            channel_access_token,
            channel_secret,
            reply_api_url,
            port,
            resolver: ResolverConfig::from_env()?,
        })
    }
}
