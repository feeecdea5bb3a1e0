use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Request failed: {}", self);

        let (status, error_message) = match self {
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// Failure of a single call to the text-generation provider.
///
/// Never surfaced to HTTP clients: callers convert it into a warning message
/// or a fallback quiz.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("LLM transport error: {0}")]
    Transport(reqwest::Error),

    #[error("LLM provider error {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed LLM response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LlmError::Malformed(err.to_string())
        } else {
            LlmError::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failures_hide_details_behind_500() {
        let err = tera::Tera::one_off("{{ missing }}", &tera::Context::new(), true).unwrap_err();
        let resp = Error::Template(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let resp = Error::Validation(validator::ValidationErrors::new()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
