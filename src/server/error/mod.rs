//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so handlers
//! can return it directly.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the error message passed to the client.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message. Also used by the catalog
    /// endpoints for empty collections and unknown ids.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing state, such as a duplicate email or favorite.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Maps a unique constraint violation to `Conflict`, keeping any other error as is.
    ///
    /// Used on inserts that are guarded by a pre-query, so that a concurrent insert
    /// which slips past the pre-query still produces a 409.
    ///
    /// # Arguments
    /// - `err` - Error returned by the insert
    /// - `msg` - Conflict message returned to the client
    pub fn conflict_on_unique(err: DbErr, msg: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(msg.to_string()),
            _ => Self::DbErr(err),
        }
    }
}

/// Converts a rejected JSON body into a 400 Bad Request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::BadRequest("No data was sent".to_string())
            }
            rejection => Self::BadRequest(format!("Invalid request body: {}", rejection.body_text())),
        }
    }
}

/// Converts a path parameter that fails to parse, such as a non-numeric id, into a
/// 400 Bad Request.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types, with the error message in
///   the `error` field
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, msg: String) -> Response {
    (status, Json(ErrorDto { msg, error: None })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns it to the client in the `error` field of the envelope.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let error = self.0.to_string();
        tracing::error!("Internal server error: {}", error);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
                error: Some(error),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn maps_conflict_to_409_without_error_field() {
        let response = AppError::Conflict("Duplicate".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Duplicate");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn passes_database_error_message_through_on_500() {
        let response = AppError::DbErr(DbErr::Custom("disk I/O error".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Internal server error");
        assert!(body["error"].as_str().unwrap().contains("disk I/O error"));
    }

    #[test]
    fn keeps_non_unique_database_errors() {
        let err = AppError::conflict_on_unique(DbErr::Custom("boom".to_string()), "Duplicate");

        assert!(matches!(err, AppError::DbErr(_)));
    }
}
