//! User account record.

use super::EntityId;

/// A registered user account.
///
/// Email and username are each unique across all users; uniqueness is
/// enforced by [`super::UserStore`] at save time, not here. The password
/// is held exactly as provided by the caller and compared by plain
/// equality — hashing is a known gap in the contract, deliberately not
/// papered over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, assigned at registration.
    pub user_id: EntityId,

    /// Email address (unique across all users).
    pub email: String,

    /// Display name (unique across all users).
    pub username: String,

    /// Password as provided at registration or last update.
    pub password: String,

    /// Profile picture URL; a placeholder is substituted when the caller
    /// supplied none.
    pub profile_picture: String,
}
