//! Registration and login flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use drivebox_auth::jwt::JwtEncoder;
use drivebox_auth::password::PasswordHasher;
use drivebox_core::error::AppError;
use drivebox_database::repositories::UserRepository;
use drivebox_entity::user::{CreateUser, User};

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed JWT access token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Handles user registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    users: Arc<dyn UserRepository>,
    /// Argon2id password hasher.
    hasher: PasswordHasher,
    /// JWT token encoder.
    encoder: JwtEncoder,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(users: Arc<dyn UserRepository>, encoder: JwtEncoder) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            encoder,
        }
    }

    /// Registers a new user and issues an access token.
    ///
    /// A taken email fails with `Conflict`.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let email = email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.clone(),
                password_hash,
            })
            .await?;

        let (token, expires_at) = self.encoder.generate_token(user.id, &user.email)?;

        info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(AuthOutcome {
            user,
            token,
            expires_at,
        })
    }

    /// Authenticates a user by email and password.
    ///
    /// Unknown email and wrong password both fail with the same
    /// `Unauthorized` message, so accounts cannot be enumerated.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let email = email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let (token, expires_at) = self.encoder.generate_token(user.id, &user.email)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthOutcome {
            user,
            token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivebox_core::config::AuthConfig;
    use drivebox_core::error::ErrorKind;
    use drivebox_database::memory::MemoryUserRepository;

    fn make_service() -> AuthService {
        let users = Arc::new(MemoryUserRepository::new());
        let encoder = JwtEncoder::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 1,
        });
        AuthService::new(users, encoder)
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = make_service();

        let registered = service
            .register("alice@example.com", "secret123")
            .await
            .unwrap();
        assert_eq!(registered.user.email, "alice@example.com");
        assert!(!registered.token.is_empty());

        let logged_in = service
            .login("alice@example.com", "secret123")
            .await
            .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let service = make_service();
        service
            .register("alice@example.com", "secret123")
            .await
            .unwrap();

        let err = service
            .register("alice@example.com", "different")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "User already exists");
    }

    #[tokio::test]
    async fn test_email_is_normalized() {
        let service = make_service();
        service
            .register("  Alice@Example.COM ", "secret123")
            .await
            .unwrap();

        let logged_in = service.login("alice@example.com", "secret123").await;
        assert!(logged_in.is_ok());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = make_service();
        service
            .register("alice@example.com", "secret123")
            .await
            .unwrap();

        let unknown = service
            .login("bob@example.com", "secret123")
            .await
            .unwrap_err();
        let wrong_password = service
            .login("alice@example.com", "nope")
            .await
            .unwrap_err();

        assert_eq!(unknown.kind, ErrorKind::Unauthorized);
        assert_eq!(wrong_password.kind, ErrorKind::Unauthorized);
        assert_eq!(unknown.message, wrong_password.message);
    }
}
