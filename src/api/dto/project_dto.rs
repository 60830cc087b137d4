//! Project-related DTOs for create, list, update and delete operations.
//!
//! Task priority and status travel as numeric codes on the wire; the
//! mapping tables live on [`Priority`] and [`Status`] so the duplicate
//! status code inherited from the original contract stays in one place.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::now_millis;
use crate::domain::{EntityId, Priority, Project, Status, Task};
use crate::error::ApiError;

/// Task payload inside `POST /users/{user_id}/projects`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskRequest {
    /// Completion instant in wall-clock milliseconds (0 when open).
    pub completion_at: i64,
    /// Deadline in wall-clock milliseconds.
    pub deadline: i64,
    /// Identifier of the user creating the task.
    pub user_id: String,
    /// Identifier of the assignee.
    pub assigned_to: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Numeric priority code (0 Low, 1 Medium, 2 High; default High).
    pub priority: i32,
    /// Numeric status code (0/2 InProgress, 1 Canceled; default OnHold).
    pub status: i32,
}

impl TaskRequest {
    /// Builds a fresh [`Task`] with a new identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a referenced user id is not
    /// a well-formed identifier.
    pub fn into_task(self) -> Result<Task, ApiError> {
        Ok(Task {
            task_id: EntityId::new(),
            created_at: now_millis(),
            completion_at: self.completion_at,
            deadline: self.deadline,
            created_by: parse_id(&self.user_id, "task user_id")?,
            assigned_to: parse_id(&self.assigned_to, "task assigned_to")?,
            title: self.title,
            description: self.description,
            priority: Priority::from_code(self.priority),
            status: Status::from_code(self.status),
            sub_tasks: Vec::new(),
            comments: Vec::new(),
        })
    }
}

/// Task payload inside `PUT /projects/{project_id}`: carries the task's
/// existing identifier.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskPutRequest {
    /// Identifier of the task being replaced.
    pub task_id: String,
    /// Completion instant in wall-clock milliseconds (0 when open).
    pub completion_at: i64,
    /// Deadline in wall-clock milliseconds.
    pub deadline: i64,
    /// Identifier of the user who created the task.
    pub user_id: String,
    /// Identifier of the assignee.
    pub assigned_to: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Numeric priority code (0 Low, 1 Medium, 2 High; default High).
    pub priority: i32,
    /// Numeric status code (0/2 InProgress, 1 Canceled; default OnHold).
    pub status: i32,
}

impl TaskPutRequest {
    /// Builds the replacement [`Task`] value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the task id or a referenced
    /// user id is not a well-formed identifier.
    pub fn into_task(self) -> Result<Task, ApiError> {
        Ok(Task {
            task_id: parse_id(&self.task_id, "task_id")?,
            created_at: now_millis(),
            completion_at: self.completion_at,
            deadline: self.deadline,
            created_by: parse_id(&self.user_id, "task user_id")?,
            assigned_to: parse_id(&self.assigned_to, "task assigned_to")?,
            title: self.title,
            description: self.description,
            priority: Priority::from_code(self.priority),
            status: Status::from_code(self.status),
            sub_tasks: Vec::new(),
            comments: Vec::new(),
        })
    }
}

/// Request body for `POST /users/{user_id}/projects`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Initial tasks.
    #[serde(default)]
    pub tasks: Vec<TaskRequest>,
}

/// Request body for `PUT /projects/{project_id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement task list; omitting it clears the list.
    #[serde(default)]
    pub tasks: Option<Vec<TaskPutRequest>>,
}

/// Task detail in project responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    /// Task identifier.
    pub task_id: String,
    /// Completion instant in wall-clock milliseconds.
    pub completion_at: i64,
    /// Deadline in wall-clock milliseconds.
    pub deadline: i64,
    /// Identifier of the creating user.
    pub user_id: String,
    /// Identifier of the assignee.
    pub assigned_to: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Numeric priority code.
    pub priority: i32,
    /// Numeric status code.
    pub status: i32,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.task_id.to_string(),
            completion_at: task.completion_at,
            deadline: task.deadline,
            user_id: task.created_by.to_string(),
            assigned_to: task.assigned_to.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.code(),
            status: task.status.code(),
        }
    }
}

/// Single project detail for create and list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    /// Project identifier.
    pub project_id: String,
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Tasks belonging to the project.
    pub tasks: Vec<TaskResponse>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.project_id.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            tasks: project.tasks.iter().map(TaskResponse::from).collect(),
        }
    }
}

/// Response body for `GET /users/{user_id}/projects`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    /// Projects created by the requested user, in store order.
    pub projects: Vec<ProjectResponse>,
}

fn parse_id(raw: &str, field: &str) -> Result<EntityId, ApiError> {
    raw.parse::<EntityId>()
        .map_err(|_| ApiError::validation(format!("{field} is not a valid identifier")))
}
