//! Project aggregate: projects own tasks, tasks own subtasks and comments.
//!
//! Everything here is a plain data record; mutation goes through the
//! services and [`super::EntityStore`], never through shared references.
//! Events carry clones of these records, so subscribers never re-query
//! the store.

use super::entity::{Entity, EntityId};
use super::user::User;

/// Task priority.
///
/// Numeric request codes map as 0 → `Low`, 1 → `Medium`, 2 → `High`,
/// anything else → `High`. `OnHold` is a legacy variant kept for records
/// written before priorities and statuses were split; no request code
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
    /// Legacy variant; unreachable from request codes.
    OnHold,
}

impl Priority {
    /// Maps a numeric request code to a priority.
    ///
    /// Unknown codes default to [`Priority::High`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::High,
        }
    }

    /// Returns the numeric wire code for this priority.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::OnHold => 3,
        }
    }
}

/// Task status.
///
/// Numeric request codes map as 0 → `InProgress`, 1 → `Canceled`,
/// 2 → `InProgress`, anything else → `OnHold`. Codes 0 and 2 both map to
/// `InProgress`; the overlap is part of the inherited contract and is
/// preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Task is finished.
    Completed,
    /// Task is being worked on.
    InProgress,
    /// Task is parked.
    OnHold,
    /// Task was abandoned.
    Canceled,
}

impl Status {
    /// Maps a numeric request code to a status.
    ///
    /// Unknown codes default to [`Status::OnHold`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::InProgress,
            1 => Self::Canceled,
            2 => Self::InProgress,
            _ => Self::OnHold,
        }
    }

    /// Returns the numeric wire code for this status.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::InProgress => 1,
            Self::OnHold => 2,
            Self::Canceled => 3,
        }
    }
}

/// A project: a titled collection of tasks owned by its creator.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique identifier, assigned at creation.
    pub project_id: EntityId,

    /// Creation instant in wall-clock milliseconds (immutable).
    pub created_at: i64,

    /// Snapshot of the creating user (immutable after creation).
    pub created_by: User,

    /// Project title.
    pub title: String,

    /// Project description.
    pub description: String,

    /// Users participating in the project.
    pub members: Vec<User>,

    /// Tasks belonging to the project.
    pub tasks: Vec<Task>,
}

impl Entity for Project {
    fn entity_id(&self) -> EntityId {
        self.project_id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier.
    pub task_id: EntityId,

    /// Creation instant in wall-clock milliseconds.
    pub created_at: i64,

    /// Completion instant in wall-clock milliseconds (0 when open).
    pub completion_at: i64,

    /// Deadline in wall-clock milliseconds.
    pub deadline: i64,

    /// Identifier of the user who created the task.
    pub created_by: EntityId,

    /// Identifier of the user the task is assigned to.
    pub assigned_to: EntityId,

    /// Task title.
    pub title: String,

    /// Task description.
    pub description: String,

    /// Task priority.
    pub priority: Priority,

    /// Task status.
    pub status: Status,

    /// Nested subtasks.
    pub sub_tasks: Vec<SubTask>,

    /// Discussion thread.
    pub comments: Vec<Comment>,
}

impl Entity for Task {
    fn entity_id(&self) -> EntityId {
        self.task_id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// A subtask nested under a task.
#[derive(Debug, Clone, PartialEq)]
pub struct SubTask {
    /// Unique identifier.
    pub sub_task_id: EntityId,

    /// Creation instant in wall-clock milliseconds.
    pub created_at: i64,

    /// Identifier of the owning task.
    pub task_id: EntityId,

    /// Identifier of the user the subtask is assigned to.
    pub assigned_to: EntityId,

    /// Subtask content.
    pub content: String,

    /// Discussion thread.
    pub comments: Vec<Comment>,
}

impl Entity for SubTask {
    fn entity_id(&self) -> EntityId {
        self.sub_task_id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// A comment attached to a task or subtask.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Unique identifier.
    pub comment_id: EntityId,

    /// Creation instant in wall-clock milliseconds.
    pub created_at: i64,

    /// Identifier of the task the comment belongs to.
    pub task_id: EntityId,

    /// Identifier of the commenting user.
    pub user_id: EntityId,

    /// Comment text.
    pub content: String,
}

impl Entity for Comment {
    fn entity_id(&self) -> EntityId {
        self.comment_id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}
