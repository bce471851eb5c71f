use crate::{
    auth::{
        hash_password, identity, verify_password, AuthenticatedUserId, LoginForm, RegisterRequest,
        TokenResponse, TokenService,
    },
    error::AppError,
    models::user::UserProfile,
    store,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns its password-free profile.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if email already exists. This is an optimization only: the unique
    // constraint on users.email is the authoritative guard against a race
    // between two concurrent registrations.
    let existing_user = store::users::find_by_email(&pool, &register_data.email).await?;

    if existing_user.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".into(),
        ));
    }

    // Hash password
    let hashed_password = hash_password(&register_data.password)
        .map_err(|_| AppError::BadRequest("Invalid password format".into()))?;

    // Insert new user
    let user = store::users::insert(&pool, &register_data.email, &hashed_password)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("User with this email already exists".into());
                }
            }
            AppError::from(e)
        })?;

    log::info!("registered user {}", user.id);

    Ok(HttpResponse::Created().json(UserProfile::from(user)))
}

/// Login user
///
/// Authenticates a user against a `username`/`password` form body and returns
/// a bearer token. Unknown emails and wrong passwords produce an identical
/// 401 so the response does not reveal which accounts exist.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    tokens: web::Data<TokenService>,
    form: web::Form<LoginForm>,
) -> Result<impl Responder, AppError> {
    let user = match store::users::find_by_email(&pool, &form.username).await? {
        Some(user) => user,
        None => return Err(AppError::Unauthorized("Incorrect email or password".into())),
    };

    if !verify_password(&form.password, &user.hashed_password) {
        return Err(AppError::Unauthorized("Incorrect email or password".into()));
    }

    if !user.is_active {
        return Err(AppError::Unauthorized("Inactive user".into()));
    }

    let access_token = tokens
        .issue(user.id)
        .map_err(|e| AppError::InternalServerError(format!("Failed to issue token: {}", e)))?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Current user
///
/// Returns the profile of the authenticated caller.
#[get("/me")]
pub async fn me(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let user = identity::load_current_user(&pool, auth.0).await?;
    Ok(HttpResponse::Ok().json(UserProfile::from(user)))
}
