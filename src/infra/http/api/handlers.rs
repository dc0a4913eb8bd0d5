use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use vitrine_api_types::{FeedbackAck, PreviewDocuments};

use crate::application::error::AppError;
use crate::domain::{feedback::FeedbackEvent, portfolio::PortfolioConfig};
use crate::infra::http::HttpState;

use super::error::{ApiError, codes};

pub async fn get_config(State(state): State<HttpState>) -> Json<PortfolioConfig> {
    Json(state.portfolio.current().await)
}

pub async fn merge_config(
    State(state): State<HttpState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PortfolioConfig>, ApiError> {
    let Json(patch) = payload.map_err(|err| ApiError::from_rejection(codes::INVALID_CONFIG, err))?;
    let saved = state.portfolio.merge_and_save(patch).await?;
    Ok(Json(saved))
}

pub async fn render_preview(
    State(state): State<HttpState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PreviewDocuments>, ApiError> {
    let Json(raw) = payload.map_err(|err| ApiError::from_rejection(codes::INVALID_CONFIG, err))?;
    let config = PortfolioConfig::from_value(raw).map_err(AppError::from)?;
    let document = state.portfolio.preview(&config)?;

    Ok(Json(PreviewDocuments {
        visual: document.visual,
        source: document.source,
    }))
}

pub async fn list_feedback(State(state): State<HttpState>) -> Json<Vec<FeedbackEvent>> {
    Json(state.feedback.history().await)
}

pub async fn record_feedback(
    State(state): State<HttpState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeedbackAck>, ApiError> {
    let Json(raw) = payload.map_err(|err| ApiError::from_rejection(codes::INVALID_EVENT, err))?;
    let event: FeedbackEvent = serde_json::from_value(raw).map_err(ApiError::invalid_event)?;

    let ack = state.feedback.record(event).await?;
    Ok(Json(ack))
}
