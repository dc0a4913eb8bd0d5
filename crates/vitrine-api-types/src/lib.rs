//! Wire types shared by the Vitrine HTTP API and its clients.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned after a feedback event has been appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAck {
    pub success: bool,
    pub reward: i32,
    pub message: String,
}

impl FeedbackAck {
    pub fn recorded(event: &str, reward: i32) -> Self {
        Self {
            success: true,
            reward,
            message: format!("Feedback logged: {event}"),
        }
    }
}

/// Both output modes of a single preview render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDocuments {
    pub visual: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_ack_names_the_event() {
        let ack = FeedbackAck::recorded("like", 5);
        assert!(ack.success);
        assert_eq!(ack.reward, 5);
        assert_eq!(ack.message, "Feedback logged: like");
    }

    #[test]
    fn error_body_omits_missing_hint() {
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: "invalid_input".into(),
                message: "Invalid configuration".into(),
                hint: None,
            },
        };
        let json = serde_json::to_string(&body).expect("serialize error body");
        assert_eq!(
            json,
            r#"{"error":{"code":"invalid_input","message":"Invalid configuration"}}"#
        );
    }
}
