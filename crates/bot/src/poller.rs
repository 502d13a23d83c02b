use std::time::Duration;

use serde_json::Value;

use homework_common::error::CycleError;
use homework_common::types::HomeworkRecord;
use homework_engine::response::{check_response, current_date};
use homework_engine::status::parse_homework;
use homework_notifier::{Delivery, DeliveryTracker, Notifier};

use crate::client::PracticumClient;

/// What a single polling cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned no submissions since the cursor.
    NoHomeworks,
    /// A new status was delivered.
    Delivered,
    /// The newest status was already delivered.
    Unchanged,
    /// A new status was found but delivery failed; it is retried next cycle.
    DeliveryFailed,
    /// Fetching or validation failed; nothing was sent.
    Failed(CycleError),
}

/// Newest submission found in one API response.
struct LatestStatus {
    record: HomeworkRecord,
    current_date: Option<i64>,
}

/// Status poller that checks the homework API on a fixed interval and reports
/// changes of the newest submission.
pub struct StatusPoller<N> {
    client: PracticumClient,
    notifier: N,
    tracker: DeliveryTracker,
    retry_period: Duration,
    /// `from_date` for the next request (unix seconds).
    cursor: i64,
}

impl<N: Notifier> StatusPoller<N> {
    pub fn new(client: PracticumClient, notifier: N, retry_period: Duration, cursor: i64) -> Self {
        Self {
            client,
            notifier,
            tracker: DeliveryTracker::new(),
            retry_period,
            cursor,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_delivered(&self) -> Option<&str> {
        self.tracker.last_delivered()
    }

    /// Start the polling loop. Runs until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "Status poller started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run one fetch → validate → notify cycle. Never fails: every error is
    /// logged and folded into the returned outcome.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let latest = match self.fetch_latest().await {
            Ok(Some(latest)) => latest,
            Ok(None) => {
                tracing::debug!(cursor = self.cursor, "No homeworks in response");
                return CycleOutcome::NoHomeworks;
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Polling cycle failed");
                return CycleOutcome::Failed(e);
            }
        };

        let message = latest.record.status_message();
        match self.tracker.deliver(&self.notifier, &message).await {
            Delivery::Sent => {
                tracing::info!(
                    homework = %latest.record.homework_name,
                    status = %latest.record.status,
                    date_updated = latest.record.date_updated.as_deref().unwrap_or("-"),
                    "Reported status change"
                );
                if let Some(next) = latest.current_date {
                    self.cursor = next;
                }
                CycleOutcome::Delivered
            }
            Delivery::Duplicate => CycleOutcome::Unchanged,
            Delivery::Failed => CycleOutcome::DeliveryFailed,
        }
    }

    /// Fetch the API answer and validate its newest record.
    async fn fetch_latest(&self) -> Result<Option<LatestStatus>, CycleError> {
        let answer: Value = self.client.get_api_answer(self.cursor).await?;
        let homeworks = check_response(&answer)?;

        // The API lists submissions newest first.
        let Some(newest) = homeworks.first() else {
            return Ok(None);
        };

        Ok(Some(LatestStatus {
            record: parse_homework(newest)?,
            current_date: current_date(&answer),
        }))
    }
}
