//! Notification delivery.
//!
//! The poll loop only talks to the [`Notifier`] trait; [`telegram`] provides
//! the Bot API implementation used in production.

pub mod telegram;

use async_trait::async_trait;
use homework_common::error::BotError;

pub use telegram::TelegramNotifier;

/// Sink for rendered notification messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the configured recipient.
    ///
    /// Any failure is reported as [`BotError::DeliveryFailure`].
    async fn notify(&self, text: &str) -> Result<(), BotError>;
}
