//! In-memory user store shared by the request handlers.
//!
//! # Design
//! `UserStore` is a cheap-to-clone handle around `Arc<RwLock<Vec<User>>>`,
//! injected into the router as state. Reads take the read lock. `create`
//! validates and inserts under a single write lock so two concurrent requests
//! cannot both claim the same id. Users keep insertion order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{ApiError, FieldErrors};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Form payload for `POST /users`. Missing fields read as blank and are
/// reported by validation rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// The two users every fresh example server starts with.
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new("foo", "foo@example.com"),
            User::new("bar", "bar@example.com"),
        ])
    }

    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|user| user.id == id).cloned()
    }

    pub async fn create(&self, input: CreateUser) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        let mut errors = FieldErrors::new();
        if input.id.is_empty() {
            errors.insert("id".to_string(), "id can not be blank".to_string());
        } else if users.iter().any(|user| user.id == input.id) {
            errors.insert("id".to_string(), "id was taken".to_string());
        }
        if input.email.is_empty() {
            errors.insert("email".to_string(), "email can not be blank".to_string());
        }
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let user = User {
            id: input.id,
            email: input.email,
        };
        users.push(user.clone());
        info!(id = %user.id, "user created");
        Ok(user)
    }

    /// Remove the user with `id`, returning it.
    pub async fn delete(&self, id: &str) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or(ApiError::NotFound)?;
        let user = users.remove(index);
        info!(id = %user.id, "user deleted");
        Ok(user)
    }
}
