use sqlx::PgPool;

use crate::models::task::{Task, TaskInput, TaskPatch};

pub async fn list_by_owner(pool: &PgPool, owner: i32) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, user_id, created_at, updated_at
         FROM tasks WHERE user_id = $1
         ORDER BY created_at DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Fetches a single task scoped to its owner.
///
/// A task owned by someone else is indistinguishable from an absent one:
/// both come back as `None`.
pub async fn find_by_id_and_owner(
    pool: &PgPool,
    id: i32,
    owner: i32,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, user_id, created_at, updated_at
         FROM tasks WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, owner: i32, input: TaskInput) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, description, completed, user_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id, title, description, completed, user_id, created_at, updated_at",
    )
    .bind(input.title)
    .bind(input.description)
    .bind(input.completed)
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Applies a patch to an already-fetched task and persists every mutable
/// field, bumping `updated_at`.
///
/// The write stays scoped to the task's owner; the caller fetched `task`
/// through `find_by_id_and_owner`, so the row is known to be theirs.
pub async fn update_fields(
    pool: &PgPool,
    mut task: Task,
    patch: TaskPatch,
) -> Result<Task, sqlx::Error> {
    patch.apply(&mut task);

    sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = $1, description = $2, completed = $3, updated_at = NOW()
         WHERE id = $4 AND user_id = $5
         RETURNING id, title, description, completed, user_id, created_at, updated_at",
    )
    .bind(task.title)
    .bind(task.description)
    .bind(task.completed)
    .bind(task.id)
    .bind(task.user_id)
    .fetch_one(pool)
    .await
}

/// Deletes an owner's task, returning whether a row was removed.
pub async fn delete(pool: &PgPool, id: i32, owner: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
