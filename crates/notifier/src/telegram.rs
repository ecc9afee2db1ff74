//! Telegram Bot API delivery via `sendMessage`.
//! Docs: <https://core.telegram.org/bots/api#sendmessage>

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use homework_common::error::BotError;

use crate::Notifier;

#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends every message to one fixed chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// `api_url` is the Bot API root, e.g. `https://api.telegram.org`.
    pub fn new(api_url: &str, bot_token: &str, chat_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, bot_token, chat_id)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_url: &str,
        bot_token: &str,
        chat_id: impl Into<String>,
    ) -> Self {
        let base_url = format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token);
        Self {
            client,
            base_url,
            chat_id: chat_id.into(),
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    async fn send_text(&self, text: &str) -> Result<(), String> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("telegram send failed: {}", e.without_url()))?;

        let status = resp.status();
        let reply: TgResponse = resp
            .json()
            .await
            .map_err(|e| format!("telegram reply unreadable ({status}): {}", e.without_url()))?;

        if !status.is_success() || !reply.ok {
            return Err(format!(
                "telegram send failed ({status}): {}",
                reply.description.unwrap_or_default()
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), BotError> {
        tracing::debug!(chat_id = %self.chat_id, "Sending Telegram message");

        match self.send_text(text).await {
            Ok(()) => {
                info!(message = text, "Telegram message sent");
                Ok(())
            }
            Err(reason) => {
                error!(error = %reason, "Telegram message not sent");
                Err(BotError::DeliveryFailure(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let notifier = TelegramNotifier::new("https://api.telegram.org/", "123:abc", "42");
        assert_eq!(notifier.base_url, "https://api.telegram.org/bot123:abc");
        assert_eq!(notifier.chat_id(), "42");
    }
}
