//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use drivebox_core::error::AppError;
use drivebox_core::result::AppResult;
use drivebox_entity::user::{CreateUser, User};

use crate::repositories::UserRepository;

/// User repository backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    /// Create an empty in-memory user repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("User already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            storage_used_bytes: 0,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn adjust_storage_used(&self, id: Uuid, delta_bytes: i64) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            user.storage_used_bytes += delta_bytes;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}
