use sqlx::PgPool;

use crate::models::user::User;

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, created_at, is_active
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, created_at, is_active
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a new user row.
///
/// Relies on the `users.email` unique constraint: a concurrent duplicate
/// registration surfaces here as a unique-violation database error even when
/// both requests passed the existence pre-check.
pub async fn insert(pool: &PgPool, email: &str, hashed_password: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, hashed_password)
         VALUES ($1, $2)
         RETURNING id, email, hashed_password, created_at, is_active",
    )
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}
