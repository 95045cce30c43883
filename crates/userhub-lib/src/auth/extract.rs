// ============================
// crates/userhub-lib/src/auth/extract.rs
// ============================
//! Request authorization: bearer token -> authenticated active user.
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::error::AppError;
use crate::models::User;
use crate::AppState;

/// Extractor yielding the authenticated principal for protected handlers.
///
/// Parses the bearer token, resolves the subject against the store and
/// re-checks the active flag on every request. Each failure is terminal
/// and surfaces with the same transport status; only the message differs.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".to_string()))?;

        let user_id = state.auth.codec().parse(token)?;

        let user = state
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("Inactive user".to_string()));
        }

        Ok(CurrentUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
