// crates/userhub-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Application error types with application-level codes
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Application-level code carried inside the response envelope.
    /// The transport status stays 200; severity lives here.
    pub fn code(&self) -> u16 {
        match self {
            AppError::Unauthorized(_) => 401,
            AppError::BadRequest(_) => 400,
            AppError::Forbidden(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::Validation(_) => 422,
            AppError::Internal(_) | AppError::Io(_) | AppError::Json(_) => 500,
        }
    }

    /// Get a sanitized message suitable for production use.
    ///
    /// Domain errors already carry stable client-facing messages; only
    /// unexpected system failures are masked.
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Internal(_) | AppError::Io(_) | AppError::Json(_) => {
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        // System failures get full detail server-side regardless of what
        // the client is shown.
        if code == 500 {
            tracing::error!(error = %self, "unexpected system error");
        }

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = ApiResponse::<()>::error(code, message);
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
