//! Identity resolution and enforcement.
//!
//! The path `user_id` on task routes is never trusted on its own: the caller's
//! identity always comes from the verified bearer token, and `enforce_identity`
//! requires the two to agree before any store access happens.

use sqlx::PgPool;

use crate::auth::token::TokenService;
use crate::error::AppError;
use crate::models::user::User;
use crate::store;

/// Recovers the caller's user id from a raw bearer token.
pub fn resolve(tokens: &TokenService, raw_token: &str) -> Result<i32, AppError> {
    tokens
        .verify(raw_token)
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))
}

/// Requires the path-level user id to match the token-level one.
///
/// A mismatch is a `Forbidden` error: the caller is authenticated, just not
/// as the user the path addresses.
pub fn enforce_identity(path_user_id: i32, token_user_id: i32) -> Result<i32, AppError> {
    if path_user_id != token_user_id {
        return Err(AppError::Forbidden(
            "User ID does not match authenticated user".into(),
        ));
    }
    Ok(path_user_id)
}

/// Fetches the user row for a resolved identity.
pub async fn load_current_user(pool: &PgPool, user_id: i32) -> Result<User, AppError> {
    store::users::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
