// ============================
// crates/userhub-lib/src/lib.rs
// ============================
//! Core functionality for the userhub account backend.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod router;
pub mod store;

use std::sync::Arc;

use crate::auth::{AuthService, TokenCodec};
use crate::config::Settings;
use crate::store::UserStore;

/// Application state shared across all handlers
pub struct AppState {
    /// Authentication service
    pub auth: AuthService,
    /// User persistence backend
    pub store: Arc<dyn UserStore>,
    /// Settings, fixed at startup
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The token codec is built here from the configured secret and TTL;
    /// nothing downstream reads ambient configuration.
    pub fn new(store: Arc<dyn UserStore>, settings: Settings) -> Self {
        let codec = TokenCodec::new(
            &settings.secret_key,
            chrono::Duration::minutes(settings.access_token_expire_minutes),
        );
        let auth = AuthService::new(store.clone(), codec);

        Self {
            auth,
            store,
            settings: Arc::new(settings),
        }
    }
}
