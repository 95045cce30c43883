// ============================
// crates/userhub-lib/src/auth/service.rs
// ============================
//! Registration and credential verification over the user store.
use std::sync::Arc;

use metrics::counter;
use uuid::Uuid;

use crate::auth::password::{hash_password_secure, password_length_ok, verify_password};
use crate::auth::token::TokenCodec;
use crate::error::AppError;
use crate::models::{RegisterRequest, TokenResponse, User};
use crate::store::UserStore;

/// Authentication service: owns the token codec and delegates user lookup
/// and persistence to the store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    codec: TokenCodec,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, codec: TokenCodec) -> Self {
        Self { store, codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Register a new user.
    ///
    /// The pre-check by email gives the friendly duplicate message; the
    /// store re-enforces uniqueness atomically, so a racing registration
    /// for the same email loses there with the same error.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if !req.email.contains('@') {
            return Err(AppError::Validation("invalid email address".to_string()));
        }
        if !password_length_ok(&req.password) {
            return Err(AppError::Validation(
                "password must be between 8 and 40 characters".to_string(),
            ));
        }

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }

        let mut password = req.password;
        let hashed_password = hash_password_secure(&mut password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: req.email,
            username: req.username,
            hashed_password,
            // self-registration never grants privileges
            is_active: true,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        };

        let user = self.store.insert(user).await?;
        counter!("auth.user.registered").increment(1);
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Check submitted credentials against the stored hash.
    ///
    /// Lookup miss and hash mismatch both yield `None`; the caller cannot
    /// tell whether the email exists. (No dummy-hash on miss, so the two
    /// paths differ in timing.)
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            tracing::warn!(email, "login failed: email not found");
            counter!("auth.login.failure").increment(1);
            return Ok(None);
        };

        if !verify_password(&user.hashed_password, password) {
            tracing::warn!(email, "login failed: incorrect password");
            counter!("auth.login.failure").increment(1);
            return Ok(None);
        }

        tracing::info!(user_id = %user.id, "user logged in");
        counter!("auth.login.success").increment(1);
        Ok(Some(user))
    }

    /// Verify credentials and issue a bearer token with the configured TTL.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        let user = self
            .authenticate(email, password)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Incorrect email or password".to_string()))?;

        let access_token = self.codec.issue(user.id, None)?;
        Ok(TokenResponse::bearer(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn service() -> AuthService {
        let store = Arc::new(MemoryStore::new());
        let codec = TokenCodec::new("test-secret", Duration::minutes(60));
        AuthService::new(store, codec)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            username: "alice".to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        let user = service.register(register_request("a@x.com")).await.unwrap();
        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert_ne!(user.hashed_password, "password123");

        let token = service.login("a@x.com", "password123").await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(service.codec().parse(&token.access_token).unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let service = service();
        service.register(register_request("a@x.com")).await.unwrap();

        let err = service
            .register(register_request("a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let service = service();

        let mut req = register_request("not-an-email");
        let err = service.register(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        req = register_request("a@x.com");
        req.password = "short".to_string();
        let err = service.register(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_authenticate_misses_collapse_to_none() {
        let service = service();
        service.register(register_request("a@x.com")).await.unwrap();

        // unknown email and wrong password are indistinguishable
        assert!(service
            .authenticate("b@x.com", "password123")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .authenticate("a@x.com", "wrongpass")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_login_failure_is_unauthorized() {
        let service = service();
        service.register(register_request("a@x.com")).await.unwrap();

        let err = service.login("a@x.com", "wrongpass").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert_eq!(err.to_string(), "Incorrect email or password");

        let err = service.login("b@x.com", "password123").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
    }
}
