//! Database pool construction and startup schema bootstrap.
//!
//! The schema statements are idempotent (`CREATE TABLE IF NOT EXISTS`) so the
//! server can be pointed at an empty database and come up ready. In shared or
//! production databases the tables are expected to be pre-created and these
//! statements are no-ops.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Creates the `users` and `tasks` tables if they do not exist yet.
///
/// `users.email` carries the unique constraint that is the authoritative guard
/// against duplicate registrations; the application-level existence check in
/// the register handler is only an optimization.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            is_active BOOLEAN NOT NULL DEFAULT TRUE
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id SERIAL PRIMARY KEY,
            title VARCHAR(200) NOT NULL,
            description VARCHAR(1000),
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks (user_id)")
        .execute(pool)
        .await?;

    Ok(())
}
