//! Failure kinds of a single ask cycle

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}{}", suffix(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AskError {
    /// 503 is what the server answers while its index is still loading.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::SERVICE_UNAVAILABLE)
    }
}

fn suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_detail() {
        let err = AskError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            detail: Some("still loading".into()),
        };
        assert_eq!(
            err.to_string(),
            "Server returned 503 Service Unavailable: still loading"
        );
        assert!(err.is_unavailable());
    }

    #[test]
    fn status_display_without_detail() {
        let err = AskError::Status {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        };
        assert_eq!(err.to_string(), "Server returned 502 Bad Gateway");
        assert!(!err.is_unavailable());
    }
}
