//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_entity::user::{CreateUser, User};

use super::UserRepository;

/// User repository backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_key") =>
            {
                AppError::conflict("User already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn adjust_storage_used(&self, id: Uuid, delta_bytes: i64) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET storage_used_bytes = storage_used_bytes + $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(delta_bytes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to adjust storage usage", e)
        })?;
        Ok(())
    }
}
