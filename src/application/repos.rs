//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{feedback::FeedbackEvent, portfolio::PortfolioConfig};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("stored document `{document}` is corrupt: {message}")]
    Corrupt {
        document: &'static str,
        message: String,
    },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }

    pub fn corrupt(document: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            document,
            message: err.to_string(),
        }
    }
}

/// Durable home of the single current portfolio configuration.
#[async_trait]
pub trait ConfigRepo: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    async fn load_config(&self) -> Result<Option<PortfolioConfig>, RepoError>;

    async fn save_config(&self, config: &PortfolioConfig) -> Result<(), RepoError>;
}

/// Append-only log of editor feedback events.
#[async_trait]
pub trait FeedbackRepo: Send + Sync {
    async fn append_event(&self, event: &FeedbackEvent) -> Result<(), RepoError>;

    /// Events in append order.
    async fn list_events(&self) -> Result<Vec<FeedbackEvent>, RepoError>;
}
