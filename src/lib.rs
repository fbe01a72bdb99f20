use serde::{Deserialize, Serialize};

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod surface;
pub mod terminal;

pub use config::AskConfig;
pub use controller::QueryController;
pub use error::AskError;
pub use gateway::{AnswerGateway, HttpAnswerGateway};
pub use surface::{DisplaySurface, LoadingGuard, RecordingSurface, SurfaceEvent};
pub use terminal::TerminalSurface;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// Body returned by the answer endpoint. The server echoes the question
/// back; anything else it sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Error body in the `{"detail": "..."}` shape the server uses for 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_question_only() {
        let body = serde_json::to_value(QuestionRequest {
            question: String::new(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "question": "" }));
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let resp: AnswerResponse = serde_json::from_str(
            r#"{"question":"hi","answer":"<b>4</b>","sources":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "<b>4</b>");
        assert_eq!(resp.question.as_deref(), Some("hi"));
    }

    #[test]
    fn response_without_answer_is_rejected() {
        let err = serde_json::from_str::<AnswerResponse>(r#"{"question":"hi"}"#);
        assert!(err.is_err());
    }
}
