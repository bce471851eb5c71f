use crate::{
    auth::{identity, AuthenticatedUserId},
    error::AppError,
    models::{TaskInput, TaskListResponse, TaskPatch},
    store,
};
use actix_web::{delete, get, post, route, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Retrieves the task list for the user addressed by the path.
///
/// The path `user_id` must match the identity carried by the bearer token;
/// otherwise the request is rejected with 403 before any query runs.
///
/// ## Responses:
/// - `200 OK`: Returns `{"tasks": [...]}` with the user's tasks, newest first.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the path user does not match the token user.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let owner = identity::enforce_identity(path.into_inner(), auth.0)?;

    let tasks = store::tasks::list_by_owner(&pool, owner).await?;

    Ok(HttpResponse::Ok().json(TaskListResponse { tasks }))
}

/// Creates a new task owned by the user addressed by the path.
///
/// The owner of the task is always the verified path/token user; the request
/// body cannot assign a task to someone else.
///
/// ## Request Body:
/// - `title`: 1 to 200 characters (required).
/// - `description` (optional): up to 1000 characters.
/// - `completed` (optional): defaults to false.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created task as JSON.
/// - `400 Bad Request`: If validation on the input fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the path user does not match the token user.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    task_data: web::Json<TaskInput>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let owner = identity::enforce_identity(path.into_inner(), auth.0)?;

    let task = store::tasks::insert(&pool, owner, task_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a single task by its ID.
///
/// The lookup is owner-scoped, so a task belonging to another user answers
/// 404 exactly like a task that does not exist.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let (path_user_id, task_id) = path.into_inner();
    let owner = identity::enforce_identity(path_user_id, auth.0)?;

    match store::tasks::find_by_id_and_owner(&pool, task_id, owner).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Updates a task with the fields present in the request body.
///
/// PUT and PATCH share these semantics: absent fields keep their current
/// values, and `updated_at` is bumped on every successful write.
///
/// ## Responses:
/// - `200 OK`: Returns the updated task as JSON.
/// - `400 Bad Request`: If validation on the patch fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the path user does not match the token user.
/// - `404 Not Found`: If the task is absent or not owned by the caller.
#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    patch: web::Json<TaskPatch>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    patch.validate()?;

    let (path_user_id, task_id) = path.into_inner();
    let owner = identity::enforce_identity(path_user_id, auth.0)?;

    let task = store::tasks::find_by_id_and_owner(&pool, task_id, owner)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let updated = store::tasks::update_fields(&pool, task, patch.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes a task by its ID.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let (path_user_id, task_id) = path.into_inner();
    let owner = identity::enforce_identity(path_user_id, auth.0)?;

    let deleted = store::tasks::delete(&pool, task_id, owner).await?;

    if !deleted {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
