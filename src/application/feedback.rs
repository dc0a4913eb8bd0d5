use std::sync::Arc;

use metrics::{counter, gauge};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{info, warn};
use vitrine_api_types::FeedbackAck;

use crate::application::{error::AppError, repos::FeedbackRepo};
use crate::domain::feedback::FeedbackEvent;

const METRIC_FEEDBACK_TOTAL: &str = "vitrine_feedback_events_total";
const METRIC_FEEDBACK_LAST_REWARD: &str = "vitrine_feedback_last_reward";

/// Scores editor feedback and keeps the append-only log.
#[derive(Clone)]
pub struct FeedbackService {
    events: Arc<dyn FeedbackRepo>,
}

impl FeedbackService {
    pub fn new(events: Arc<dyn FeedbackRepo>) -> Self {
        Self { events }
    }

    /// Timestamp (when absent), append, and score one event.
    pub async fn record(&self, mut event: FeedbackEvent) -> Result<FeedbackAck, AppError> {
        if event.timestamp.is_none() {
            let now = OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .map_err(|err| AppError::unexpected(format!("failed to format timestamp: {err}")))?;
            event.timestamp = Some(now);
        }

        self.events.append_event(&event).await?;

        let reward = event.reward();
        counter!(METRIC_FEEDBACK_TOTAL).increment(1);
        gauge!(METRIC_FEEDBACK_LAST_REWARD).set(f64::from(reward));
        info!(
            target: "vitrine::feedback",
            event = %event.event,
            reward,
            "feedback recorded"
        );

        Ok(FeedbackAck::recorded(&event.event, reward))
    }

    /// Logged events in append order; empty when the log cannot be read.
    pub async fn history(&self) -> Vec<FeedbackEvent> {
        self.events.list_events().await.unwrap_or_else(|err| {
            warn!(
                target: "vitrine::feedback",
                error = %err,
                "feedback log unreadable; returning empty history"
            );
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    use super::*;
    use crate::application::repos::RepoError;

    #[derive(Default)]
    struct MemoryLog {
        events: Mutex<Vec<FeedbackEvent>>,
        broken: bool,
    }

    #[async_trait]
    impl FeedbackRepo for MemoryLog {
        async fn append_event(&self, event: &FeedbackEvent) -> Result<(), RepoError> {
            self.events.lock().await.push(event.clone());
            Ok(())
        }

        async fn list_events(&self) -> Result<Vec<FeedbackEvent>, RepoError> {
            if self.broken {
                return Err(RepoError::corrupt("feedback log", "trailing comma"));
            }
            Ok(self.events.lock().await.clone())
        }
    }

    #[tokio::test]
    async fn record_fills_timestamp_and_scores() {
        let log = Arc::new(MemoryLog::default());
        let service = FeedbackService::new(log.clone());

        let ack = service
            .record(FeedbackEvent::named("like").with_details(json!({ "improvedContrast": true })))
            .await
            .expect("record");

        assert!(ack.success);
        assert_eq!(ack.reward, 8);
        assert_eq!(ack.message, "Feedback logged: like");

        let stored = log.events.lock().await;
        let timestamp = stored[0].timestamp.as_deref().expect("timestamp filled");
        assert!(OffsetDateTime::parse(timestamp, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn supplied_timestamp_is_kept() {
        let log = Arc::new(MemoryLog::default());
        let service = FeedbackService::new(log.clone());
        let mut event = FeedbackEvent::named("edit");
        event.timestamp = Some("2024-01-01T00:00:00Z".into());

        service.record(event).await.expect("record");

        assert_eq!(
            log.events.lock().await[0].timestamp.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn unreadable_history_is_empty() {
        let service = FeedbackService::new(Arc::new(MemoryLog {
            broken: true,
            ..Default::default()
        }));
        assert!(service.history().await.is_empty());
    }
}
