use std::{sync::Arc, time::Instant};

use metrics::{counter, histogram};
use serde_json::Value;
use tracing::{info, warn};

use crate::application::{
    error::AppError,
    render::{RenderedDocument, assemble},
    repos::ConfigRepo,
};
use crate::domain::portfolio::PortfolioConfig;

const METRIC_RENDER_TOTAL: &str = "vitrine_render_total";
const METRIC_RENDER_MS: &str = "vitrine_render_ms";

/// Loads, updates and renders the stored portfolio configuration.
#[derive(Clone)]
pub struct PortfolioService {
    configs: Arc<dyn ConfigRepo>,
}

impl PortfolioService {
    pub fn new(configs: Arc<dyn ConfigRepo>) -> Self {
        Self { configs }
    }

    /// The stored configuration, or the default when none is usable.
    pub async fn current(&self) -> PortfolioConfig {
        match self.configs.load_config().await {
            Ok(Some(config)) => config,
            Ok(None) => PortfolioConfig::default(),
            Err(err) => {
                warn!(
                    target: "vitrine::portfolio",
                    error = %err,
                    "stored configuration unusable; falling back to default"
                );
                PortfolioConfig::default()
            }
        }
    }

    /// Shallow-merge `patch` over the current configuration and persist the result.
    pub async fn merge_and_save(&self, patch: Value) -> Result<PortfolioConfig, AppError> {
        let merged = self.current().await.merged_with(patch)?;
        self.configs.save_config(&merged).await?;
        info!(
            target: "vitrine::portfolio",
            theme = %merged.theme,
            sections = merged.components.len(),
            "configuration saved"
        );
        Ok(merged)
    }

    /// Render the stored configuration.
    pub async fn preview_current(&self) -> Result<RenderedDocument, AppError> {
        let config = self.current().await;
        self.preview(&config)
    }

    /// Render an arbitrary configuration without touching storage.
    pub fn preview(&self, config: &PortfolioConfig) -> Result<RenderedDocument, AppError> {
        render_instrumented(config)
    }
}

pub(crate) fn render_instrumented(config: &PortfolioConfig) -> Result<RenderedDocument, AppError> {
    let started = Instant::now();
    let document = assemble(config)?;
    counter!(METRIC_RENDER_TOTAL).increment(1);
    histogram!(METRIC_RENDER_MS).record(started.elapsed().as_secs_f64() * 1000.0);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    use super::*;
    use crate::{application::repos::RepoError, domain::theme::Theme};

    #[derive(Default)]
    struct MemoryConfigs {
        stored: Mutex<Option<PortfolioConfig>>,
        broken: bool,
    }

    #[async_trait]
    impl ConfigRepo for MemoryConfigs {
        async fn load_config(&self) -> Result<Option<PortfolioConfig>, RepoError> {
            if self.broken {
                return Err(RepoError::from_persistence("disk on fire"));
            }
            Ok(self.stored.lock().await.clone())
        }

        async fn save_config(&self, config: &PortfolioConfig) -> Result<(), RepoError> {
            *self.stored.lock().await = Some(config.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn unreadable_storage_falls_back_to_default() {
        let service = PortfolioService::new(Arc::new(MemoryConfigs {
            broken: true,
            ..Default::default()
        }));
        assert_eq!(service.current().await, PortfolioConfig::default());
    }

    #[tokio::test]
    async fn merge_persists_the_patched_configuration() {
        let repo = Arc::new(MemoryConfigs::default());
        let service = PortfolioService::new(repo.clone());

        let saved = service
            .merge_and_save(json!({ "theme": "playful", "components": ["hero"] }))
            .await
            .expect("merge");

        assert_eq!(saved.theme.known(), Some(Theme::Playful));
        assert_eq!(repo.stored.lock().await.as_ref(), Some(&saved));
        assert_eq!(service.current().await, saved);
    }

    #[tokio::test]
    async fn invalid_patch_is_a_validation_error_and_saves_nothing() {
        let repo = Arc::new(MemoryConfigs::default());
        let service = PortfolioService::new(repo.clone());

        let err = service
            .merge_and_save(json!({ "animations": "fade-in" }))
            .await
            .expect_err("invalid");

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(repo.stored.lock().await.is_none());
    }

    #[tokio::test]
    async fn preview_current_renders_the_stored_theme() {
        let service = PortfolioService::new(Arc::new(MemoryConfigs::default()));
        service
            .merge_and_save(json!({ "theme": "dark" }))
            .await
            .expect("merge");

        let document = service.preview_current().await.expect("render");
        assert!(document.visual.contains("background: #1a1a1a"));
    }
}
