//! Telegram Bot API delivery.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::NotifyError;
use crate::Notifier;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Longest slice of an error response body kept in [`NotifyError`].
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends plain-text messages to one chat through `sendMessage`.
///
/// Use [`TelegramNotifier::new`] for production or
/// [`TelegramNotifier::with_base_url`] to point at a mock server in tests.
pub struct TelegramNotifier {
    client: Client,
    endpoint: Url,
    chat_id: String,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .field("endpoint", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    /// Creates a notifier pointed at the public Bot API.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(bot_token: &str, chat_id: &str, timeout_secs: u64) -> Result<Self, NotifyError> {
        Self::with_base_url(bot_token, chat_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a notifier with a custom API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`NotifyError::InvalidBaseUrl`] if `base_url` does not
    /// parse. The token is never echoed in the error.
    pub fn with_base_url(
        bot_token: &str,
        chat_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base = base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/bot{bot_token}/sendMessage"))
            .map_err(|_| NotifyError::InvalidBaseUrl(base.to_owned()))?;

        Ok(Self {
            client,
            endpoint,
            chat_id: chat_id.to_owned(),
        })
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        tracing::info!(chat_id = %self.chat_id, chars = text.chars().count(), "notification sent");
        Ok(())
    }
}
