//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drivebox_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
    /// Response data.
    pub data: T,
    /// Server timestamp in epoch milliseconds.
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response with the default message.
    pub fn ok(data: T) -> Self {
        Self::with_message("Action completed successfully", data)
    }

    /// Creates a successful response with a custom message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Total bytes of live file metadata owned by this user.
    pub storage_used_bytes: i64,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            storage_used_bytes: user.storage_used_bytes,
            created_at: user.created_at,
        }
    }
}

/// Registration / login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Active blob storage backend.
    pub storage_backend: String,
    /// Whether the blob store answered its health probe.
    pub storage_healthy: bool,
}
