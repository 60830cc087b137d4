//! Project service: create, list, update and delete projects.

use std::sync::Arc;

use crate::domain::entity::now_millis;
use crate::domain::{
    DomainEvent, EntityId, EntityStore, EventBus, Project, Task, User, UserStore,
};
use crate::error::ApiError;

/// Orchestration layer for project operations.
///
/// Resolves creators through the [`UserStore`], keeps project state in
/// an [`EntityStore`], and publishes [`DomainEvent::ProjectCreated`]
/// after a successful save. The user lookup and the project save are
/// not one transaction: a save failure does not undo anything, and
/// nothing needs undoing, since the lookup is read-only.
#[derive(Debug, Clone)]
pub struct ProjectService {
    users: Arc<UserStore>,
    projects: Arc<EntityStore<Project>>,
    event_bus: EventBus,
}

impl ProjectService {
    /// Creates a new `ProjectService`.
    #[must_use]
    pub fn new(
        users: Arc<UserStore>,
        projects: Arc<EntityStore<Project>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            users,
            projects,
            event_bus,
        }
    }

    /// Creates a project owned by the user `created_by` refers to.
    ///
    /// The creator reference is resolved first; a malformed or unknown
    /// id fails the whole operation before any state changes. On save
    /// success a [`DomainEvent::ProjectCreated`] is published carrying
    /// snapshots of the creator and the project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when `created_by` is not a valid
    /// or known user id; store faults surface as-is.
    pub async fn create_project(
        &self,
        created_by: &str,
        title: &str,
        description: &str,
        members: Vec<User>,
        tasks: Vec<Task>,
    ) -> Result<Project, ApiError> {
        let creator = match created_by.parse::<EntityId>() {
            Ok(id) => self.users.get_by_id(id).await,
            Err(_) => Err(ApiError::not_found("malformed user id")),
        }
        .map_err(|_| ApiError::conflict("user id is not valid or does not exist"))?;

        let project = Project {
            project_id: EntityId::new(),
            created_at: now_millis(),
            created_by: creator.clone(),
            title: title.to_string(),
            description: description.to_string(),
            members,
            tasks,
        };

        let saved = self.projects.save(project).await?;
        tracing::info!(project_id = %saved.project_id, creator = %creator.user_id, "project created");

        let event = DomainEvent::ProjectCreated {
            created_by: creator,
            project: saved.clone(),
        };
        if let Err(err) = self.event_bus.publish(event).await {
            tracing::warn!(project_id = %saved.project_id, %err, "project created but event publish failed");
        }

        Ok(saved)
    }

    /// Returns every project whose creator matches `user_id`, in store
    /// order.
    ///
    /// The filter compares identifier strings, so an unparseable
    /// `user_id` simply matches nothing.
    ///
    /// # Errors
    ///
    /// Store read faults surface as [`ApiError::Internal`].
    pub async fn get_all_projects(&self, user_id: &str) -> Result<Vec<Project>, ApiError> {
        let projects = self.projects.get_all().await?;
        Ok(projects
            .into_iter()
            .filter(|p| p.created_by.user_id.to_string() == user_id)
            .collect())
    }

    /// Replaces a project's title, description, members and tasks,
    /// preserving its identifier, creator and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when `project_id` is not a valid
    /// or known project id; the store update's own failures surface
    /// unchanged.
    pub async fn update_project(
        &self,
        project_id: &str,
        title: &str,
        description: &str,
        members: Vec<User>,
        tasks: Vec<Task>,
    ) -> Result<Project, ApiError> {
        let existing = match project_id.parse::<EntityId>() {
            Ok(id) => self.projects.get_by_id(id).await,
            Err(_) => Err(ApiError::not_found("malformed project id")),
        }
        .map_err(|_| ApiError::conflict("project id is not valid or does not exist"))?;

        let updated = Project {
            title: title.to_string(),
            description: description.to_string(),
            members,
            tasks,
            ..existing
        };
        self.projects.update(updated).await
    }

    /// Deletes a project.
    ///
    /// Tasks recorded under the project are part of the project value
    /// itself; no cascading cleanup happens anywhere else.
    ///
    /// # Errors
    ///
    /// Delegates to the store: unknown ids surface as
    /// [`ApiError::NotFound`], a malformed id as [`ApiError::Conflict`].
    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        let id = project_id
            .parse::<EntityId>()
            .map_err(|_| ApiError::conflict("project id is not valid or does not exist"))?;
        self.projects.remove(id).await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Subscription;
    use crate::service::user_service::{DEFAULT_PROFILE_PICTURE, UserService};

    struct Fixture {
        users: UserService,
        projects: ProjectService,
        subscription: Subscription,
    }

    fn make_fixture() -> Fixture {
        let user_store = Arc::new(UserStore::new());
        let project_store = Arc::new(EntityStore::new());
        let (event_bus, subscription) = EventBus::bounded(10);
        let users = UserService::new(
            Arc::clone(&user_store),
            event_bus.clone(),
            DEFAULT_PROFILE_PICTURE.to_string(),
        );
        let projects = ProjectService::new(user_store, project_store, event_bus);
        Fixture {
            users,
            projects,
            subscription,
        }
    }

    async fn register(fixture: &Fixture, username: &str, email: &str) -> User {
        let result = fixture
            .users
            .create_user(username, email, "1m4*5Aa78@", None)
            .await;
        let Ok(user) = result else {
            panic!("user registration failed");
        };
        user
    }

    async fn create_project(fixture: &Fixture, owner: &User, title: &str, description: &str) -> Project {
        let result = fixture
            .projects
            .create_project(
                &owner.user_id.to_string(),
                title,
                description,
                Vec::new(),
                Vec::new(),
            )
            .await;
        let Ok(project) = result else {
            panic!("project creation failed");
        };
        project
    }

    #[tokio::test]
    async fn create_project_snapshots_the_creator_and_publishes() {
        let mut fixture = make_fixture();
        let owner = register(&fixture, "vespasoft", "vespasoft@gmail.com").await;

        let project = create_project(&fixture, &owner, "Project 000001", "This is my favorite project").await;
        assert_eq!(project.created_by.user_id, owner.user_id);
        assert_eq!(project.title, "Project 000001");

        // First event is the registration, second the project creation.
        assert!(matches!(
            fixture.subscription.recv().await,
            Some(DomainEvent::UserCreated { .. })
        ));
        let Some(DomainEvent::ProjectCreated { created_by, project: snapshot }) =
            fixture.subscription.recv().await
        else {
            panic!("expected a ProjectCreated event");
        };
        assert_eq!(created_by.user_id, owner.user_id);
        assert_eq!(snapshot.project_id, project.project_id);
    }

    #[tokio::test]
    async fn create_project_with_unknown_creator_mutates_nothing() {
        let fixture = make_fixture();
        let stranger = EntityId::new().to_string();

        let result = fixture
            .projects
            .create_project(&stranger, "ghost", "never saved", Vec::new(), Vec::new())
            .await;
        assert_eq!(
            result,
            Err(ApiError::conflict("user id is not valid or does not exist"))
        );

        let Ok(all) = fixture.projects.get_all_projects(&stranger).await else {
            panic!("listing failed");
        };
        assert!(all.is_empty());

        // No event was published either.
        let Fixture {
            users,
            projects,
            mut subscription,
        } = fixture;
        drop(users);
        drop(projects);
        assert!(subscription.recv().await.is_none());
    }

    #[tokio::test]
    async fn create_project_with_malformed_creator_id_fails_the_same_way() {
        let fixture = make_fixture();
        let result = fixture
            .projects
            .create_project("not-a-uuid", "ghost", "never saved", Vec::new(), Vec::new())
            .await;
        assert_eq!(
            result,
            Err(ApiError::conflict("user id is not valid or does not exist"))
        );
    }

    #[tokio::test]
    async fn get_all_projects_filters_by_creator_in_store_order() {
        let fixture = make_fixture();
        let alice = register(&fixture, "alice", "alice@example.com").await;
        let bob = register(&fixture, "bob", "bob@example.com").await;

        create_project(&fixture, &alice, "a1", "").await;
        create_project(&fixture, &bob, "b1", "").await;
        create_project(&fixture, &alice, "a2", "").await;

        let Ok(alices) = fixture
            .projects
            .get_all_projects(&alice.user_id.to_string())
            .await
        else {
            panic!("listing failed");
        };
        let titles: Vec<&str> = alices.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn update_project_replaces_fields_and_preserves_identity() {
        let fixture = make_fixture();
        let owner = register(&fixture, "vespasoft", "vespasoft@gmail.com").await;
        let project = create_project(&fixture, &owner, "Project 000001", "This is my favorite project").await;

        let result = fixture
            .projects
            .update_project(
                &project.project_id.to_string(),
                "Project 000001",
                "This is my favorite project updated",
                Vec::new(),
                Vec::new(),
            )
            .await;
        let Ok(updated) = result else {
            panic!("update failed");
        };
        assert_eq!(updated.project_id, project.project_id);
        assert_eq!(updated.created_at, project.created_at);
        assert_eq!(updated.created_by.user_id, owner.user_id);
        assert_eq!(updated.description, "This is my favorite project updated");
    }

    #[tokio::test]
    async fn update_unknown_project_fails_without_touching_others() {
        let fixture = make_fixture();
        let owner = register(&fixture, "vespasoft", "vespasoft@gmail.com").await;
        let _kept = create_project(&fixture, &owner, "kept", "original").await;

        let result = fixture
            .projects
            .update_project(
                &EntityId::new().to_string(),
                "ghost",
                "ghost",
                Vec::new(),
                Vec::new(),
            )
            .await;
        assert_eq!(
            result,
            Err(ApiError::conflict("project id is not valid or does not exist"))
        );

        let Ok(all) = fixture
            .projects
            .get_all_projects(&owner.user_id.to_string())
            .await
        else {
            panic!("listing failed");
        };
        assert_eq!(all.len(), 1);
        assert_eq!(all.first().map(|p| p.description.as_str()), Some("original"));
    }

    #[tokio::test]
    async fn delete_project_removes_it_from_listings() {
        let fixture = make_fixture();
        let owner = register(&fixture, "vespasoft", "vespasoft@gmail.com").await;
        let project = create_project(&fixture, &owner, "doomed", "").await;

        let result = fixture
            .projects
            .delete_project(&project.project_id.to_string())
            .await;
        assert_eq!(result, Ok(()));

        let Ok(all) = fixture
            .projects
            .get_all_projects(&owner.user_id.to_string())
            .await
        else {
            panic!("listing failed");
        };
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_project_is_not_found() {
        let fixture = make_fixture();
        let result = fixture
            .projects
            .delete_project(&EntityId::new().to_string())
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn end_to_end_scenario() {
        let fixture = make_fixture();

        let user = register(&fixture, "vespasoft", "vespasoft@gmail.com").await;
        let project = create_project(
            &fixture,
            &user,
            "Project 000001",
            "This is my favorite project",
        )
        .await;
        assert_eq!(project.created_by.user_id, user.user_id);

        let updated = fixture
            .projects
            .update_project(
                &project.project_id.to_string(),
                "Project 000001",
                "This is my favorite project updated",
                Vec::new(),
                Vec::new(),
            )
            .await;
        assert!(updated.is_ok());

        let Ok(all) = fixture
            .projects
            .get_all_projects(&user.user_id.to_string())
            .await
        else {
            panic!("listing failed");
        };
        assert_eq!(all.len(), 1);
        assert_eq!(
            all.first().map(|p| p.description.as_str()),
            Some("This is my favorite project updated")
        );
    }
}
