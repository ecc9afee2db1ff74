use std::time::Duration;

use chrono::Utc;

use homework_common::error::BotError;
use homework_notifier::Notifier;
use homework_status::{extract_latest_submission, format_notification, server_time};

use crate::client::StatusSource;

/// Prefix marking a re-sent message that was formatted in an earlier cycle.
pub const STALE_MARKER: &str = "[Устаревшие данные] ";

/// What a single poll cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status-change notification was delivered.
    Notified,
    /// The notification was rendered but Telegram refused it. Logged only.
    DeliveryFailed,
    /// Any other failure. `fallback_sent` tells whether the stale-marked
    /// last message reached the chat.
    Failed {
        kind: &'static str,
        fallback_sent: bool,
    },
}

/// Polls the homework API on a fixed period and forwards status changes.
pub struct HomeworkPoller<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
    /// Lower bound sent as `from_date` on the next request.
    cursor: i64,
    /// Most recent notification text successfully rendered, in any cycle.
    last_message: Option<String>,
}

impl<S: StatusSource, N: Notifier> HomeworkPoller<S, N> {
    /// The cursor starts at the current time; it is never persisted.
    pub fn new(source: S, notifier: N, retry_period: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            cursor: Utc::now().timestamp(),
            last_message: None,
        }
    }

    /// Start from an explicit cursor instead of "now".
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    ///
    /// Cycle failures never end the loop; the same fixed pause follows every
    /// cycle whatever its outcome.
    pub async fn run(&mut self) {
        tracing::info!(
            start_cursor = self.cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "Homework poller started"
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, cursor = self.cursor, "Poll cycle finished");
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run exactly one poll cycle without sleeping.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(()) => CycleOutcome::Notified,
            Err(e) if e.is_delivery_failure() => {
                tracing::debug!(error = %e, "Delivery failure swallowed, continuing");
                CycleOutcome::DeliveryFailed
            }
            Err(e) => {
                let fallback_sent = self.send_fallback().await;
                tracing::error!(
                    critical = true,
                    kind = e.kind(),
                    error = %e,
                    fallback_sent,
                    "Bot malfunction during poll cycle"
                );
                CycleOutcome::Failed {
                    kind: e.kind(),
                    fallback_sent,
                }
            }
        }
    }

    /// Fetch, validate, render and deliver the latest submission status.
    async fn poll_once(&mut self) -> Result<(), BotError> {
        let body = self.source.get_status_update(self.cursor).await?;

        let submission = extract_latest_submission(&body)?;
        let message = format_notification(submission)?;
        self.last_message = Some(message.clone());

        self.notifier.notify(&message).await?;

        // Only a delivered change moves the cursor; anything else is
        // fetched again next cycle.
        if let Some(current_date) = server_time(&body) {
            tracing::debug!(from = self.cursor, to = current_date, "Advancing poll cursor");
            self.cursor = current_date;
        }
        Ok(())
    }

    /// Best-effort re-send of the last rendered message, marked as stale.
    ///
    /// Skipped when nothing has been rendered since startup.
    async fn send_fallback(&self) -> bool {
        let Some(last) = self.last_message.as_deref() else {
            tracing::warn!("No message rendered yet, skipping fallback notification");
            return false;
        };

        let text = format!("{STALE_MARKER}{last}");
        match self.notifier.notify(&text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Fallback notification not delivered");
                false
            }
        }
    }
}
