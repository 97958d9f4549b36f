//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and a status
//! code that tells the caller which side failed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlchat_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`, plus `"sql"` when the
/// failure happened while running generated SQL.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 422 Unprocessable Entity: the database rejected the generated SQL.
    UnprocessableEntity { message: String, sql: Option<String> },
    /// 502 Bad Gateway: the text-generation API failed.
    BadGateway(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::json!({"error": msg})),
            Self::UnprocessableEntity { message, sql } => {
                let mut body = serde_json::json!({"error": message});
                if let Some(sql) = sql {
                    body["sql"] = serde_json::Value::String(sql);
                }
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            },
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, serde_json::json!({"error": msg})),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({"error": "internal server error"}),
                )
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Llm(_) => Self::BadGateway(err.to_string()),
            ServiceError::Storage(_) | ServiceError::Execution { .. } => {
                let sql = err.sql().map(str::to_owned);
                Self::UnprocessableEntity { message: err.to_string(), sql }
            },
            ServiceError::Blocking(_) => Self::Internal(err.to_string()),
        }
    }
}
