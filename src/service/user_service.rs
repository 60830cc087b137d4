//! User service: registration and password update.

use std::sync::Arc;

use crate::domain::{DomainEvent, EntityId, EventBus, User, UserStore};
use crate::error::ApiError;

use super::validation::{PASSWORD_POLICY_MESSAGE, is_valid_email, is_valid_password};

/// Profile picture substituted when registration supplies none.
pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";

/// Orchestration layer for user operations.
///
/// Owns a reference to the [`UserStore`] for state and an [`EventBus`]
/// handle for event emission. Every mutation follows the pattern:
/// validate → mutate the store → publish the event only if the mutation
/// succeeded.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserStore>,
    event_bus: EventBus,
    default_profile_picture: String,
}

impl UserService {
    /// Creates a new `UserService`.
    #[must_use]
    pub fn new(users: Arc<UserStore>, event_bus: EventBus, default_profile_picture: String) -> Self {
        Self {
            users,
            event_bus,
            default_profile_picture,
        }
    }

    /// Registers a new user.
    ///
    /// Validates the username, email shape and password policy before
    /// touching any state; the first violation is reported and nothing
    /// else happens. On success the stored user is returned and a
    /// [`DomainEvent::UserCreated`] is published. A failed save is
    /// returned verbatim, with no event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected input and
    /// [`ApiError::Conflict`] when the email or username is taken.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        profile_picture: Option<String>,
    ) -> Result<User, ApiError> {
        if username.is_empty() {
            return Err(ApiError::validation("username must not be empty"));
        }
        if email.is_empty() {
            return Err(ApiError::validation("email must not be empty"));
        }
        if !is_valid_email(email) {
            return Err(ApiError::validation("email is not valid"));
        }
        if !is_valid_password(password) {
            return Err(ApiError::validation(PASSWORD_POLICY_MESSAGE));
        }

        let user = User {
            user_id: EntityId::new(),
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            profile_picture: profile_picture
                .unwrap_or_else(|| self.default_profile_picture.clone()),
        };

        let saved = self.users.save(user).await?;

        let event = DomainEvent::UserCreated {
            user_id: saved.user_id,
            username: saved.username.clone(),
            email: saved.email.clone(),
        };
        if let Err(err) = self.event_bus.publish(event).await {
            // The mutation is already committed; publish failure is not
            // rolled back (known gap in the contract).
            tracing::warn!(user_id = %saved.user_id, %err, "user created but event publish failed");
        }

        Ok(saved)
    }

    /// Replaces a user's password.
    ///
    /// The stored password is compared to `current_password` by plain
    /// equality — no hashing is applied anywhere in this flow, a known
    /// gap preserved from the inherited contract. Publishes
    /// [`DomainEvent::UserPasswordUpdated`] after the store update
    /// succeeds.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Conflict`] when old and new password are equal,
    ///   when the user id is invalid or unknown, or when the current
    ///   password does not match.
    /// - [`ApiError::Validation`] when the new password fails the policy.
    pub async fn update_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        if current_password == new_password {
            return Err(ApiError::conflict("cannot update to an equal password"));
        }
        if !is_valid_password(new_password) {
            return Err(ApiError::validation(PASSWORD_POLICY_MESSAGE));
        }

        let user = match user_id.parse::<EntityId>() {
            Ok(id) => self.users.get_by_id(id).await,
            Err(_) => Err(ApiError::not_found("malformed user id")),
        }
        .map_err(|_| ApiError::conflict("user id is invalid or does not exist"))?;

        if user.password != current_password {
            return Err(ApiError::conflict("current password provided is not correct"));
        }

        let updated = User {
            password: new_password.to_string(),
            ..user.clone()
        };
        self.users.update(updated).await?;

        let event = DomainEvent::UserPasswordUpdated {
            user_id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
        };
        if let Err(err) = self.event_bus.publish(event).await {
            tracing::warn!(user_id = %user.user_id, %err, "password updated but event publish failed");
        }

        Ok(())
    }
}
