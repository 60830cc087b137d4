//! User-related DTOs for registration and password update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Desired username (must not be empty).
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password (checked against the policy).
    pub password: String,
    /// Optional profile picture URL; a placeholder is used when absent.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Request body for `PUT /users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePasswordRequest {
    /// Identifier of the user whose password changes.
    pub user_id: String,
    /// Password currently on record.
    pub current_password: String,
    /// Replacement password (checked against the policy).
    pub new_password: String,
}

/// Response body for `POST /users` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier.
    pub user_id: String,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Profile picture URL.
    pub profile_picture: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}
