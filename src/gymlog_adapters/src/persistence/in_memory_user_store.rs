use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use gymlog_core::{Email, NewUser, User, UserId, UserLookup, UserStore, UserStoreError};

/// In-memory user store backed by a `HashMap` keyed by email, which makes
/// duplicate emails unrepresentable. `Clone` shares the same map.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserLookup for InMemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User::new(
            UserId::new(),
            new_user.name,
            new_user.email.clone(),
            new_user.password_hash,
            Utc::now(),
        );
        users.insert(new_user.email, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.id() == *id)
            .cloned())
    }
}
