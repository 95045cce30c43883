// ============================
// crates/userhub-lib/src/response.rs
// ============================
//! Uniform JSON envelope returned by every endpoint.
//!
//! Domain errors ride the same envelope as successes; the transport status
//! is always 200 and the application-level `code` carries the severity.
use serde::Serialize;

/// Response envelope: `code` is 0 on success, an HTTP-like error code otherwise.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response wrapping `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Error response with no data payload.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}
