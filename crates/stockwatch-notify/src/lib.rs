pub mod error;
pub mod telegram;

use std::future::Future;

pub use error::NotifyError;
pub use telegram::TelegramNotifier;

/// Delivers one plain-text message to a fixed destination.
pub trait Notifier {
    /// Sends `text`. Implementations do not retry.
    fn send(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Writes messages to stdout instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        println!("{text}");
        Ok(())
    }
}
