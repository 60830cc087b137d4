//! User handlers: registration and password update.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateUserRequest, MessageResponse, UpdatePasswordRequest, UserResponse};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /users` — Register a new user.
///
/// # Errors
///
/// Returns [`ApiError`] on invalid input or a taken email/username.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Register a new user",
    description = "Validates the username, email and password policy, stores the account and emits a UserCreated event.",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 409, description = "Invalid input or user already exists", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .create_user(&req.username, &req.email, &req.password, req.profile_picture)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// `PUT /users` — Replace a user's password.
///
/// # Errors
///
/// Returns [`ApiError`] when the user id, current password or new
/// password is rejected.
#[utoipa::path(
    put,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Update a user's password",
    description = "Checks the current password by equality, replaces it and emits a UserPasswordUpdated event.",
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 409, description = "Rejected password change", body = ErrorResponse),
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .user_service
        .update_password(&req.user_id, &req.current_password, &req.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("password has been updated successfully")),
    ))
}

/// User management routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).put(update_password))
}
