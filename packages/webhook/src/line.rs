//! Reply API client.

use crate::error::{Result, WebhookError};
use crate::models::ReplyRequest;

#[derive(Debug, Clone)]
pub struct ReplyClient {
    http: reqwest::Client,
    reply_api_url: String,
    channel_access_token: String,
}

impl ReplyClient {
    pub fn new(
        reply_api_url: impl Into<String>,
        channel_access_token: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            reply_api_url: reply_api_url.into(),
            channel_access_token: channel_access_token.into(),
        })
    }

    /// Send one text reply.
    pub async fn send(&self, reply_token: &str, text: &str) -> Result<()> {
        let response = self
            .http
            .post(&self.reply_api_url)
            .bearer_auth(&self.channel_access_token)
            .json(&ReplyRequest::text(reply_token, text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WebhookError::ReplyApi {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
