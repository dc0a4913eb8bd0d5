use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    application::{error::HttpError, render::source_view_page},
    infra::http::HttpState,
    presentation::views::{document_response, render_not_found_response},
};

const SOURCE: &str = "infra::http::preview";

pub fn build_preview_router() -> Router<HttpState> {
    Router::new()
        .route("/", get(visual_preview))
        .route("/preview/source", get(source_preview))
        .route("/_health", get(health))
        .fallback(not_found)
}

async fn visual_preview(State(state): State<HttpState>) -> Response {
    match state.portfolio.preview_current().await {
        Ok(document) => document_response(document.visual),
        Err(err) => HttpError::from(err).into_response(),
    }
}

async fn source_preview(State(state): State<HttpState>) -> Response {
    let document = match state.portfolio.preview_current().await {
        Ok(document) => document,
        Err(err) => return HttpError::from(err).into_response(),
    };

    match source_view_page(&document) {
        Ok(page) => document_response(page),
        Err(err) => HttpError::from_error(
            SOURCE,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Source view could not be rendered",
            &err,
        )
        .into_response(),
    }
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found(request: Request<Body>) -> Response {
    render_not_found_response(request.uri().path())
}
