// ============================
// crates/userhub-lib/src/store.rs
// ============================
//! User persistence abstraction with in-memory implementation.
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

/// Trait for user storage backends
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Insert a new user. Fails with `BadRequest` when the email is taken;
    /// uniqueness is enforced here, so two racing registrations resolve to
    /// one insert and one rejection.
    async fn insert(&self, user: User) -> Result<User, AppError>;
}

/// In-memory implementation of the `UserStore` trait
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    /// email -> user id index; the entry claim in `insert` is the
    /// uniqueness arbiter
    email_index: DashMap<String, Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let Some(id) = self.email_index.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        match self.email_index.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user(email: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: "alice".to_string(),
            hashed_password: "$argon2id$v=19$stub".to_string(),
            is_active: true,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryStore::new();
        let user = store.insert(sample_user("a@x.com")).await.unwrap();

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.insert(sample_user("a@x.com")).await.unwrap();

        let err = store.insert(sample_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let store = MemoryStore::new();
        store.insert(sample_user("a@x.com")).await.unwrap();

        assert!(store.find_by_email("A@X.COM").await.unwrap().is_none());
    }
}
