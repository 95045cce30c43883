// ============================
// crates/userhub-lib/src/handlers/auth.rs
// ============================
//! Registration, login and current-user endpoints.
use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::handlers::ApiJson;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UserOut};
use crate::response::ApiResponse;
use crate::AppState;

/// `POST /api/v1/auth/register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<ApiResponse<UserOut>>, AppError> {
    let user = state.auth.register(req).await?;
    Ok(Json(ApiResponse::ok(UserOut::from(&user))))
}

/// `POST /api/v1/auth/login`
///
/// Verifies credentials and answers with a bearer token. Unknown email and
/// wrong password surface identically.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    let token = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(token)))
}

/// `GET /api/v1/auth/me` — protected; the extractor does the work.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<ApiResponse<UserOut>> {
    Json(ApiResponse::ok(UserOut::from(&user)))
}
