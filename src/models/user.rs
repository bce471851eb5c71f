use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A user row as stored in the database.
///
/// Deliberately not `Serialize`: the hashed password must never travel in a
/// response body. API responses use [`UserProfile`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// The password-free projection of a user returned by the API.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}
