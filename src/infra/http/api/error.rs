use crate::application::error::{AppError, ErrorReport};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vitrine_api_types::{ApiErrorBody, ApiErrorMessage};

pub mod codes {
    pub const INVALID_CONFIG: &str = "invalid_config";
    pub const INVALID_EVENT: &str = "invalid_event";
    pub const STORAGE: &str = "storage_error";
    pub const RENDER: &str = "render_error";
    pub const INTERNAL: &str = "internal_error";
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    hint: Option<String>,
    chain: Vec<String>,
}

impl ApiError {
    fn new(
        status: StatusCode,
        code: &'static str,
        message: &'static str,
        hint: Option<String>,
    ) -> Self {
        Self {
            status,
            code,
            message,
            hint,
            chain: Vec::new(),
        }
    }


    /// Body could not be read as JSON at all.
    pub fn from_rejection(code: &'static str, rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            code,
            "Request body is not valid JSON",
            Some(rejection.body_text()),
        )
    }

    /// Body is JSON but does not describe a feedback event.
    pub fn invalid_event(err: serde_json::Error) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            codes::INVALID_EVENT,
            "Feedback event is malformed",
            Some(err.to_string()),
        )
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let status = error.status_code();
        let code = match &error {
            AppError::Domain(_) if status == StatusCode::BAD_REQUEST => codes::INVALID_CONFIG,
            AppError::Repo(_) => codes::STORAGE,
            AppError::Render(_) => codes::RENDER,
            _ => codes::INTERNAL,
        };
        let hint = (status == StatusCode::BAD_REQUEST).then(|| error.to_string());
        let chain = ErrorReport::from_error("infra::http::api", status, &error).messages;

        Self {
            status,
            code,
            message: error.presentation_message(),
            hint,
            chain,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let report = if self.chain.is_empty() {
            ErrorReport::from_message(
                "infra::http::api",
                self.status,
                format!(
                    "{}: {}",
                    self.code,
                    self.hint.as_deref().unwrap_or(self.message)
                ),
            )
        } else {
            ErrorReport {
                source: "infra::http::api",
                status: self.status,
                messages: self.chain,
            }
        };

        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message.to_string(),
                hint: self.hint,
            },
        };
        let mut response = (self.status, Json(body)).into_response();
        report.attach(&mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;

    #[test]
    fn malformed_events_are_client_errors() {
        let err = serde_json::from_str::<crate::domain::feedback::FeedbackEvent>("{}")
            .expect_err("event name is required");
        let error = ApiError::invalid_event(err);
        assert_eq!(error.code, codes::INVALID_EVENT);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let report = response.extensions().get::<ErrorReport>().expect("report");
        assert!(report.messages[0].starts_with("invalid_event: "));
    }

    #[test]
    fn storage_failures_keep_their_chain() {
        let error = ApiError::from(AppError::from(RepoError::from_persistence("disk full")));
        assert_eq!(error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.code, codes::STORAGE);
        assert_eq!(error.hint, None);
        assert_eq!(error.chain, ["persistence error: disk full"]);
    }
}
