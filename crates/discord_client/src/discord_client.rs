//! Sending [MessageData] to a Discord channel through an incoming webhook.

use crate::discord_client_error::NotifyError;
use crate::message::MessageData;
use crate::payload_splitter::DISCORD_MESSAGE_LIMIT;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

/// Anything that can deliver a finished message to Discord.
#[async_trait]
pub trait DiscordClient {
    /// Deliver the whole message, splitting it into as many Discord messages as needed. Parts are
    /// sent in order; the first failure stops delivery of the remaining parts.
    async fn send_message(&self, message: &MessageData) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct WebhookBody<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

/// A [DiscordClient] that POSTs to a single webhook URL.
#[derive(Clone)]
pub struct DiscordWebhookClient {
    http: reqwest::Client,
    webhook_url: Url,
    username: Option<String>,
}

impl DiscordWebhookClient {
    /// `username` overrides the name the webhook posts as, when given.
    pub fn new(http: reqwest::Client, webhook_url: Url, username: Option<String>) -> Self {
        DiscordWebhookClient {
            http,
            webhook_url,
            username,
        }
    }

    async fn post(&self, content: &str, part: usize, total: usize) -> Result<(), NotifyError> {
        let body = WebhookBody {
            content,
            username: self.username.as_deref(),
        };
        // The webhook URL carries its token, so it is stripped from transport errors.
        let response = self
            .http
            .post(self.webhook_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                part,
                total,
                status,
                body,
            });
        }

        debug!(part, total, "Discord accepted message part.");
        Ok(())
    }
}

#[async_trait]
impl DiscordClient for DiscordWebhookClient {
    async fn send_message(&self, message: &MessageData) -> Result<(), NotifyError> {
        let parts = message.split(DISCORD_MESSAGE_LIMIT);
        if parts.is_empty() {
            return Err(NotifyError::EmptyPayload);
        }

        let total = parts.len();
        if total > 1 {
            info!(
                characters = message.char_count(),
                "Message exceeds {} characters; sending it as {} parts.",
                DISCORD_MESSAGE_LIMIT,
                total
            );
        }
        for (i, part) in parts.iter().enumerate() {
            self.post(part, i + 1, total).await?;
        }

        info!(
            host = self.webhook_url.host_str().unwrap_or_default(),
            "Sent notification to Discord."
        );
        Ok(())
    }
}
