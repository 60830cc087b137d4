//! Entity identity: unique identifier plus creation timestamp.
//!
//! [`EntityId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that entity identifiers cannot be confused with other
//! UUIDs. The [`Entity`] trait is the capability every stored record
//! exposes: an identifier assigned once at creation, and the wall-clock
//! creation instant in milliseconds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored entity.
///
/// Wraps a UUID v4. Generated once at entity creation time and immutable
/// thereafter. Used for identity lookup in [`super::EntityStore`] and as
/// the reference carried by domain events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(uuid::Uuid);

impl EntityId {
    /// Creates a new random `EntityId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates an `EntityId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(uuid::Uuid::from_str(s)?))
    }
}

impl From<uuid::Uuid> for EntityId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for uuid::Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Capability shared by every record an [`super::EntityStore`] can hold.
///
/// Identity is assigned at creation and never reassigned; the creation
/// timestamp is wall-clock milliseconds captured at the same moment.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Returns the unique identifier of this entity.
    fn entity_id(&self) -> EntityId;

    /// Returns the creation instant in wall-clock milliseconds.
    fn created_at(&self) -> i64;
}

/// Returns the current wall-clock instant in milliseconds.
///
/// Captured once per entity at creation time.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
