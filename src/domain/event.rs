//! Domain events reflecting completed state changes.
//!
//! Every successful mutation publishes a [`DomainEvent`] through the
//! [`super::EventBus`]. Events are immutable facts carrying denormalized
//! snapshots of the data they describe, so subscribers never need to
//! re-query a store.

use super::entity::EntityId;
use super::project::Project;
use super::user::User;

/// Domain event emitted after a successful state mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// Emitted when a new user account was saved.
    UserCreated {
        /// Identifier of the created user.
        user_id: EntityId,
        /// Username at creation time.
        username: String,
        /// Email at creation time.
        email: String,
    },

    /// Emitted when a user's password was replaced.
    UserPasswordUpdated {
        /// Identifier of the updated user.
        user_id: EntityId,
        /// Username at update time.
        username: String,
        /// Email at update time.
        email: String,
    },

    /// Emitted when a new project was saved.
    ProjectCreated {
        /// Snapshot of the creating user.
        created_by: User,
        /// Snapshot of the created project.
        project: Project,
    },
}

impl DomainEvent {
    /// Returns a short label naming the event kind, for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UserCreated { .. } => "user_created",
            Self::UserPasswordUpdated { .. } => "user_password_updated",
            Self::ProjectCreated { .. } => "project_created",
        }
    }
}
