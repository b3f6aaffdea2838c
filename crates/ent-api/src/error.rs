//! API error handling
//!
//! Provides RPC status errors with JSON responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ent_db::RepositoryError;
use serde::{Deserialize, Serialize};

/// RPC status errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request message could not be read
    InvalidArgument(String),
    /// Storage or decoding failure while serving the request
    Internal(String),
}

impl ApiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ApiError::InvalidArgument(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    /// RPC status code name
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "invalid_argument",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidArgument(msg) | ApiError::Internal(msg) => msg,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body: `{"code": ..., "message": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: String,
    pub message: String,
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "Request failed in repository");
        ApiError::internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "Rejected request body");
        ApiError::invalid_argument(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = RpcStatus {
            code: self.code().to_string(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
