//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and loads the user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use drivebox_core::error::AppError;
use drivebox_entity::user::User;

use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// A token whose user has since been deleted is rejected, so every
/// handler behind this extractor can rely on the owner row existing.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_token(token)?;

        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        Ok(AuthUser(user))
    }
}
