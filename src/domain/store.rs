//! Generic in-memory entity storage with identity-based lookup.
//!
//! [`EntityStore`] keeps the authoritative collection for one entity
//! kind in a [`tokio::sync::RwLock`]-guarded `Vec`. The lock serializes
//! mutations, so every operation is atomic with respect to the others on
//! the same store; insertion order is preserved and is the order
//! [`EntityStore::get_all`] reports.

use tokio::sync::RwLock;

use super::entity::{Entity, EntityId};
use crate::error::ApiError;

/// Authoritative in-memory collection for one entity kind.
///
/// # Concurrency
///
/// A single lock guards all five operations: reads run concurrently,
/// each mutation is exclusive. Cross-store sequences remain
/// non-transactional — a failure after an earlier store committed does
/// not roll the earlier effect back.
///
/// # Semantics
///
/// - `save` appends unconditionally; uniqueness of business keys is the
///   caller's concern, one layer up.
/// - `update`/`remove` targeting an unknown identifier are no-ops that
///   report not-found, never a partial mutation.
/// - `get_all` returns a clone of the collection, so readers observe a
///   consistent snapshot rather than a live view.
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    entities: RwLock<Vec<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Appends an entity to the collection.
    ///
    /// Does not check identifier uniqueness; calling twice with the same
    /// entity appends twice. Duplicate prevention belongs to the caller.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory backing; the `Result` is the store
    /// contract every backing must satisfy.
    pub async fn save(&self, entity: T) -> Result<T, ApiError> {
        let mut entities = self.entities.write().await;
        entities.push(entity.clone());
        Ok(entity)
    }

    /// Replaces the entity with the same identifier, preserving its
    /// position in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] naming the identifier if no entity
    /// matches. The collection is untouched in that case.
    pub async fn update(&self, entity: T) -> Result<T, ApiError> {
        let mut entities = self.entities.write().await;
        match entities.iter_mut().find(|e| e.entity_id() == entity.entity_id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(ApiError::not_found(format!(
                "no entity exists with the id {}",
                entity.entity_id()
            ))),
        }
    }

    /// Returns the entity with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no entity matches.
    pub async fn get_by_id(&self, entity_id: EntityId) -> Result<T, ApiError> {
        let entities = self.entities.read().await;
        entities
            .iter()
            .find(|e| e.entity_id() == entity_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("no entity exists with the id {entity_id}")))
    }

    /// Returns a snapshot of the full collection in insertion order.
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory backing; see [`EntityStore::save`].
    pub async fn get_all(&self) -> Result<Vec<T>, ApiError> {
        let entities = self.entities.read().await;
        Ok(entities.clone())
    }

    /// Removes the first entity with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no entity matches.
    pub async fn remove(&self, entity_id: EntityId) -> Result<(), ApiError> {
        let mut entities = self.entities.write().await;
        match entities.iter().position(|e| e.entity_id() == entity_id) {
            Some(index) => {
                entities.remove(index);
                Ok(())
            }
            None => Err(ApiError::not_found(format!(
                "no entity exists with the id {entity_id}"
            ))),
        }
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::entity::now_millis;
    use crate::domain::project::{Priority, Status, Task};

    fn make_task(title: &str) -> Task {
        Task {
            task_id: EntityId::new(),
            created_at: now_millis(),
            completion_at: 0,
            deadline: 0,
            created_by: EntityId::new(),
            assigned_to: EntityId::new(),
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::InProgress,
            sub_tasks: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn save_then_get_by_id() {
        let store = EntityStore::new();
        let task = make_task("write the report");

        let Ok(saved) = store.save(task.clone()).await else {
            panic!("save failed");
        };
        assert_eq!(saved.task_id, task.task_id);

        let Ok(found) = store.get_by_id(task.task_id).await else {
            panic!("lookup failed");
        };
        assert_eq!(found.title, "write the report");
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_not_found() {
        let store: EntityStore<Task> = EntityStore::new();
        let result = store.get_by_id(EntityId::new()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = EntityStore::new();
        let first = make_task("first");
        let second = make_task("second");
        let Ok(_) = store.save(first.clone()).await else {
            panic!("save failed");
        };
        let Ok(_) = store.save(second).await else {
            panic!("save failed");
        };

        let renamed = Task {
            title: "first, renamed".to_string(),
            ..first.clone()
        };
        let Ok(updated) = store.update(renamed).await else {
            panic!("update failed");
        };
        assert_eq!(updated.title, "first, renamed");

        // Position preserved: the renamed task is still listed first.
        let Ok(all) = store.get_all().await else {
            panic!("get_all failed");
        };
        assert_eq!(all.first().map(|t| t.title.as_str()), Some("first, renamed"));
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found_and_mutates_nothing() {
        let store = EntityStore::new();
        let known = make_task("kept");
        let Ok(_) = store.save(known.clone()).await else {
            panic!("save failed");
        };

        let stranger = make_task("stranger");
        let result = store.update(stranger).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let Ok(all) = store.get_all().await else {
            panic!("get_all failed");
        };
        assert_eq!(all.len(), 1);
        assert_eq!(all.first().map(|t| t.title.as_str()), Some("kept"));
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one() {
        let store = EntityStore::new();
        let task = make_task("doomed");
        let Ok(_) = store.save(task.clone()).await else {
            panic!("save failed");
        };

        let Ok(()) = store.remove(task.task_id).await else {
            panic!("remove failed");
        };
        assert!(store.get_by_id(task.task_id).await.is_err());

        // Repeating the failed remove reports the same failure.
        let again = store.remove(task.task_id).await;
        assert!(matches!(again, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn save_is_not_idempotent() {
        let store = EntityStore::new();
        let task = make_task("twice");
        let Ok(_) = store.save(task.clone()).await else {
            panic!("save failed");
        };
        let Ok(_) = store.save(task).await else {
            panic!("save failed");
        };

        let Ok(all) = store.get_all().await else {
            panic!("get_all failed");
        };
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn get_all_reports_insertion_order() {
        let store = EntityStore::new();
        for title in ["a", "b", "c"] {
            let Ok(_) = store.save(make_task(title)).await else {
                panic!("save failed");
            };
        }

        let Ok(all) = store.get_all().await else {
            panic!("get_all failed");
        };
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
