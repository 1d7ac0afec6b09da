//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forum_core::error::CoreError;
use forum_core::permissions::grant_role;
use forum_core::roles::{Membership, Role};
use forum_core::types::DbId;
use forum_db::models::user::{CreateUser, User};
use forum_db::repositories::{NameRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info. Role flags are read from the permission store on each
/// call, never from the token.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// Highest global tier held.
    pub role: Role,
    pub is_admin: bool,
    pub is_superadmin: bool,
}

impl UserInfo {
    fn new(user: User, membership: Membership) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: membership.tier(),
            is_admin: membership.admin,
            is_superadmin: membership.superadmin,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. The default `users/member` grant is best-effort: if it
/// fails the account still exists and the failure is logged.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserInfo>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::InvalidRequest(e.to_string())))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_string(),
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create).await.map_err(|e| {
        if is_unique_violation(&e, "uq_users_username") {
            AppError::Core(CoreError::AlreadyExists(format!(
                "Username '{}' is already taken",
                create.username
            )))
        } else {
            AppError::Database(e)
        }
    })?;

    NameRepo::upsert(&state.pool, user.id, &user.username).await?;

    if let Err(e) = grant_role(state.permissions.as_ref(), user.id, Role::User).await {
        tracing::warn!(user_id = user.id, error = %e, "Default membership grant failed");
    }
    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let info = UserInfo::new(user, Membership::default());
    Ok((StatusCode::CREATED, Json(DataResponse::new(info))))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthenticated(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let membership = state.engine.resolver().global(user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::new(user, membership),
    }))
}

/// GET /api/v1/auth/me
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserInfo>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    let membership = state.engine.resolver().global(user.id).await?;

    Ok(Json(DataResponse::new(UserInfo::new(user, membership))))
}
