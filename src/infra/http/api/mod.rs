pub mod error;
pub mod handlers;

use axum::{Router, routing::get};

use crate::infra::http::HttpState;

pub fn build_api_router() -> Router<HttpState> {
    Router::new()
        .route(
            "/api/generate",
            get(handlers::get_config).post(handlers::merge_config),
        )
        .route(
            "/api/feedback",
            get(handlers::list_feedback).post(handlers::record_feedback),
        )
        .route("/preview", axum::routing::post(handlers::render_preview))
}
