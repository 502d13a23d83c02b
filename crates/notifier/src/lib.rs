//! Notification delivery.
//!
//! [`Notifier`] is the delivery capability (Telegram in production).
//! [`DeliveryTracker`] sits in front of it and suppresses messages that were
//! already delivered. State is in-memory only and resets on restart.

pub mod telegram;

use std::future::Future;

use homework_common::error::NotifyError;

pub use telegram::TelegramNotifier;

/// Delivers text to a fixed destination.
pub trait Notifier: Send + Sync {
    fn send(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Outcome of a delivery attempt through [`DeliveryTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message was new and the notifier accepted it.
    Sent,
    /// The message equals the last delivered one; nothing was sent.
    Duplicate,
    /// The notifier failed. The message stays pending for the next cycle.
    Failed,
}

/// Remembers the last successfully delivered message.
#[derive(Debug, Default)]
pub struct DeliveryTracker {
    last_delivered: Option<String>,
}

impl DeliveryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_delivered(&self) -> Option<&str> {
        self.last_delivered.as_deref()
    }

    /// Whether `message` differs from the last delivered message.
    pub fn is_new(&self, message: &str) -> bool {
        self.last_delivered.as_deref() != Some(message)
    }

    /// Send `message` unless it was already delivered.
    ///
    /// The marker only moves after the notifier confirms delivery. Delivery
    /// errors are logged here and never propagated.
    pub async fn deliver<N: Notifier>(&mut self, notifier: &N, message: &str) -> Delivery {
        if !self.is_new(message) {
            tracing::debug!("No status change, notification skipped");
            return Delivery::Duplicate;
        }

        tracing::debug!("Sending notification");
        match notifier.send(message).await {
            Ok(()) => {
                tracing::info!(text = message, "Notification delivered");
                self.last_delivered = Some(message.to_string());
                Delivery::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to deliver notification");
                Delivery::Failed
            }
        }
    }
}
