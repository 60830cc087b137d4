//! Dedicated user storage with business-key uniqueness.
//!
//! Users get their own store instead of an [`super::EntityStore`]
//! instance because uniqueness of email and username is checked at save
//! time, inside the same critical section as the insert. Everything else
//! follows the generic store's semantics.

use tokio::sync::RwLock;

use super::entity::EntityId;
use super::user::User;
use crate::error::ApiError;

/// Authoritative in-memory collection of user accounts.
///
/// One lock guards every operation; the duplicate check and the insert
/// in [`UserStore::save`] happen under the same exclusive guard, so two
/// concurrent registrations with the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Saves a new user after checking email/username uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when another user already holds
    /// the same email or username.
    pub async fn save(&self, user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(ApiError::conflict("the user already exists"));
        }
        users.push(user.clone());
        tracing::info!(user_id = %user.user_id, username = %user.username, "user created");
        Ok(user)
    }

    /// Replaces the user with the same identifier, preserving position.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] naming the identifier if no user
    /// matches.
    pub async fn update(&self, user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(slot) => {
                *slot = user.clone();
                tracing::info!(user_id = %user.user_id, username = %user.username, "user updated");
                Ok(user)
            }
            None => Err(ApiError::not_found(format!(
                "no user exists with the id {}",
                user.user_id
            ))),
        }
    }

    /// Returns the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no user matches.
    pub async fn get_by_id(&self, user_id: EntityId) -> Result<User, ApiError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("no user exists with the id {user_id}")))
    }

    /// Returns the user with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no user matches.
    pub async fn get_by_email(&self, email: &str) -> Result<User, ApiError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("no user exists with the email {email}")))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_user(username: &str, email: &str) -> User {
        User {
            user_id: EntityId::new(),
            email: email.to_string(),
            username: username.to_string(),
            password: "1m4*5Aa78@".to_string(),
            profile_picture: "https://example.com/avatar.png".to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_lookup_by_id_and_email() {
        let store = UserStore::new();
        let user = make_user("vespasoft", "vespasoft@gmail.com");

        let Ok(saved) = store.save(user.clone()).await else {
            panic!("save failed");
        };
        assert_eq!(saved.user_id, user.user_id);

        let Ok(by_id) = store.get_by_id(user.user_id).await else {
            panic!("id lookup failed");
        };
        assert_eq!(by_id.username, "vespasoft");

        let Ok(by_email) = store.get_by_email("vespasoft@gmail.com").await else {
            panic!("email lookup failed");
        };
        assert_eq!(by_email.user_id, user.user_id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = UserStore::new();
        let Ok(_) = store.save(make_user("first", "shared@example.com")).await else {
            panic!("save failed");
        };

        let result = store.save(make_user("second", "shared@example.com")).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let store = UserStore::new();
        let Ok(_) = store.save(make_user("shared", "first@example.com")).await else {
            panic!("save failed");
        };

        let result = store.save(make_user("shared", "second@example.com")).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn duplicate_save_does_not_duplicate_the_record() {
        let store = UserStore::new();
        let user = make_user("once", "once@example.com");
        let Ok(_) = store.save(user.clone()).await else {
            panic!("save failed");
        };
        let _ = store.save(user.clone()).await;

        // Still exactly one record behind the unique keys.
        let Ok(found) = store.get_by_email("once@example.com").await else {
            panic!("lookup failed");
        };
        assert_eq!(found.user_id, user.user_id);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let store = UserStore::new();
        let user = make_user("renamed", "renamed@example.com");
        let Ok(_) = store.save(user.clone()).await else {
            panic!("save failed");
        };

        let rotated = User {
            password: "n3w*Pa55@".to_string(),
            ..user.clone()
        };
        let Ok(_) = store.update(rotated).await else {
            panic!("update failed");
        };

        let Ok(found) = store.get_by_id(user.user_id).await else {
            panic!("lookup failed");
        };
        assert_eq!(found.password, "n3w*Pa55@");
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let store = UserStore::new();
        let result = store.update(make_user("ghost", "ghost@example.com")).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
