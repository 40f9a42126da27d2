use thiserror::Error;

/// Errors returned when delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered with a non-2xx status.
    #[error("Telegram API returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("invalid Telegram API base URL '{0}'")]
    InvalidBaseUrl(String),
}
