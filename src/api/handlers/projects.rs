//! Project handlers: create, list, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::dto::{
    CreateProjectRequest, MessageResponse, ProjectListResponse, ProjectResponse, TaskPutRequest,
    TaskRequest, UpdateProjectRequest,
};
use crate::app_state::AppState;
use crate::domain::Task;
use crate::error::{ApiError, ErrorResponse};

/// `POST /users/{user_id}/projects` — Create a project for a user.
///
/// # Errors
///
/// Returns [`ApiError`] when the creator id is unknown or a task payload
/// is malformed.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/projects",
    tag = "Projects",
    summary = "Create a project",
    description = "Resolves the creator, stores the project with its initial tasks and emits a ProjectCreated event.",
    params(
        ("user_id" = String, Path, description = "Identifier of the creating user"),
    ),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created successfully", body = ProjectResponse),
        (status = 409, description = "Unknown creator or invalid payload", body = ErrorResponse),
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = req
        .tasks
        .into_iter()
        .map(TaskRequest::into_task)
        .collect::<Result<Vec<Task>, ApiError>>()?;

    let project = state
        .project_service
        .create_project(&user_id, &req.title, &req.description, Vec::new(), tasks)
        .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// `GET /users/{user_id}/projects` — List a user's projects.
///
/// # Errors
///
/// Returns [`ApiError`] on store read failures.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/projects",
    tag = "Projects",
    summary = "List a user's projects",
    description = "Returns every project whose creator matches the given user id, in store order.",
    params(
        ("user_id" = String, Path, description = "Identifier of the creating user"),
    ),
    responses(
        (status = 200, description = "Projects for the user", body = ProjectListResponse),
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.project_service.get_all_projects(&user_id).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.iter().map(ProjectResponse::from).collect(),
    }))
}

/// `PUT /projects/{project_id}` — Replace a project's mutable fields.
///
/// # Errors
///
/// Returns [`ApiError`] when the project id is unknown or a task payload
/// is malformed.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{project_id}",
    tag = "Projects",
    summary = "Update a project",
    description = "Replaces title, description and tasks while preserving identifier, creator and creation timestamp.",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = MessageResponse),
        (status = 409, description = "Unknown project or invalid payload", body = ErrorResponse),
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = req
        .tasks
        .unwrap_or_default()
        .into_iter()
        .map(TaskPutRequest::into_task)
        .collect::<Result<Vec<Task>, ApiError>>()?;

    state
        .project_service
        .update_project(&project_id, &req.title, &req.description, Vec::new(), tasks)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("project has been updated successfully")),
    ))
}

/// `DELETE /projects/{project_id}` — Remove a project.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the project does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{project_id}",
    tag = "Projects",
    summary = "Delete a project",
    description = "Removes the project from the store. Tasks live inside the project value, so nothing else is touched.",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
    ),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 409, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.project_service.delete_project(&project_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("project has been deleted successfully")),
    ))
}

/// Project management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/projects",
            get(list_projects).post(create_project),
        )
        .route(
            "/projects/{project_id}",
            put(update_project).delete(delete_project),
        )
}
