// ============================
// crates/userhub-lib/src/models.rs
// ============================
//! User records and request/response payloads.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored user record.
///
/// `hashed_password` is the PHC-formatted output of the password hasher,
/// never the plaintext. It stays out of `Debug` output and is never
/// serialized to clients.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    /// Unique, case-sensitive as stored
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("hashed_password", &"<redacted>")
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .finish()
    }
}

/// Public projection of a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOut {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<&User> for UserOut {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued bearer token, returned from a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            username: "alice".to_string(),
            hashed_password: "$argon2id$v=19$secret".to_string(),
            is_active: true,
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let debug = format!("{user:?}");
        assert!(!debug.contains("argon2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_user_out_omits_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            username: "alice".to_string(),
            hashed_password: "$argon2id$v=19$secret".to_string(),
            is_active: true,
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let out = UserOut::from(&user);
        let json = serde_json::to_string(&out).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains("a@x.com"));
    }
}
