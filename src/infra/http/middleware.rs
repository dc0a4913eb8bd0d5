use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_INBOUND_ID_LEN: usize = 64;

/// Per-request correlation id, present on both the request and the response.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
}

/// Adopt a well-formed inbound `x-request-id` or mint a UUID, and echo it back.
pub async fn set_request_context(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| usable_request_id(id))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let ctx = RequestContext { request_id };
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response.extensions_mut().insert(ctx);
    response
}

fn usable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_INBOUND_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

macro_rules! log_failure {
    ($level:ident, $failure:expr, $message:literal) => {{
        let failure = $failure;
        $level!(
            target: "vitrine::http::response",
            status = failure.status,
            method = %failure.method,
            path = failure.path,
            elapsed_ms = failure.elapsed_ms,
            source = failure.source,
            detail = %failure.detail,
            chain = ?failure.chain,
            request_id = failure.request_id,
            $message,
        );
    }};
}

struct Failure<'a> {
    status: u16,
    method: &'a str,
    path: &'a str,
    elapsed_ms: u128,
    source: &'static str,
    detail: String,
    chain: Vec<String>,
    request_id: &'a str,
}

/// Log 4xx at `warn` and 5xx at `error`, consuming any attached [`ErrorReport`].
/// Everything else is a `debug` line with the elapsed time.
pub async fn log_responses(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();

    let mut response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if !(status.is_client_error() || status.is_server_error()) {
        debug!(
            target: "vitrine::http::request",
            status = status.as_u16(),
            method = %method,
            path = %path,
            elapsed_ms,
            request_id = %request_id,
            "request served",
        );
        return response;
    }

    let (source, chain) = match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => (report.source, report.messages),
        None => ("unknown", Vec::new()),
    };
    let failure = Failure {
        status: status.as_u16(),
        method: &method,
        path: &path,
        elapsed_ms,
        source,
        detail: chain
            .first()
            .cloned()
            .unwrap_or_else(|| "no diagnostic available".to_string()),
        chain,
        request_id: &request_id,
    };

    if status.is_server_error() {
        log_failure!(error, failure, "request failed");
    } else {
        log_failure!(warn, failure, "client request error");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_ids_must_be_short_and_plain() {
        assert!(usable_request_id("edit-42_a.b"));
        assert!(!usable_request_id(""));
        assert!(!usable_request_id("two words"));
        assert!(!usable_request_id(&"x".repeat(MAX_INBOUND_ID_LEN + 1)));
    }
}
