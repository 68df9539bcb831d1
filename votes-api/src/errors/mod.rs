//! Error types for the Votes API.
//! `ConfigError` and `ServiceError` cover start-up, `ApiError` is what a
//! request handler returns and is rendered as a JSON `{ "error": ... }` body.
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;
use votes_engine::VoteError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tracing setup error: {0}")]
    Tracing(String),
}

/// Errors returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Vote(#[from] VoteError),
    #[error("Unauthorized: missing user context")]
    Unauthorized,
    #[error("Invalid {0} id")]
    InvalidId(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Vote(VoteError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Vote(VoteError::NotFound(_)) | ApiError::Vote(VoteError::UserNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Vote(VoteError::Unauthorized) | ApiError::Unauthorized => {
                StatusCode::FORBIDDEN
            }
            ApiError::Vote(VoteError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Vote(VoteError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message exposed to the client. Storage details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Vote(VoteError::InvalidInput(reason)) => reason.clone(),
            ApiError::Vote(VoteError::Storage(_)) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use votes_shared::types::VoteTarget;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        let post = VoteTarget::post(Uuid::new_v4());
        assert_eq!(
            ApiError::from(VoteError::InvalidInput("Invalid vote type".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::from(VoteError::NotFound(post)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(VoteError::UserNotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(VoteError::Unauthorized).status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::from(VoteError::Conflict(post)).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(VoteError::Storage("connection reset".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::InvalidId("post").status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_client_messages() {
        let comment = VoteTarget::comment(Uuid::new_v4());
        assert_eq!(
            ApiError::from(VoteError::InvalidInput("Invalid vote type".into())).client_message(),
            "Invalid vote type"
        );
        assert_eq!(
            ApiError::from(VoteError::NotFound(comment)).client_message(),
            "Comment not found"
        );
        assert_eq!(
            ApiError::from(VoteError::Conflict(comment)).client_message(),
            "You have already voted on this comment"
        );
        assert_eq!(
            ApiError::from(VoteError::Storage("relation \"posts\" does not exist".into()))
                .client_message(),
            "Internal server error"
        );
    }
}
