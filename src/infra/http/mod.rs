mod api;
mod middleware;
mod preview;

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};

use crate::application::{feedback::FeedbackService, portfolio::PortfolioService};

pub use middleware::{REQUEST_ID_HEADER, RequestContext};

/// Services shared by every handler.
#[derive(Clone)]
pub struct HttpState {
    pub portfolio: Arc<PortfolioService>,
    pub feedback: Arc<FeedbackService>,
}

pub fn build_router(state: HttpState) -> Router {
    preview::build_preview_router()
        .merge(api::build_api_router())
        .with_state(state)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(axum_middleware::from_fn(middleware::set_request_context))
}
