use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing or unknown API key.
    Forbidden(String),
    /// Bad request error (invalid input).
    BadRequest(String),
    /// Resource not found error.
    NotFound(String),
    /// The VPA verification call failed at the transport or HTTP level.
    ///
    /// The failure text is relayed to the caller verbatim.
    Upstream(String),
    /// Internal server error.
    InternalError(String),
}

impl AppError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Every variant renders as `{"error": <message>}`. Logs errors
    /// appropriately based on their severity.
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Forbidden(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                msg
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg,
            AppError::Upstream(msg) => {
                tracing::error!("VPA verification failed: {}", msg);
                msg
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Forbidden("Missing API key".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Upstream("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_upstream_message_is_relayed() {
        let response = AppError::Upstream("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "connection refused"}));
    }

    #[tokio::test]
    async fn test_internal_error_is_masked() {
        let response = AppError::InternalError("client build failed".into()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }
}
