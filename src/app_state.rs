//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{ProjectService, UserService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// User service for registration and password updates.
    pub user_service: Arc<UserService>,
    /// Project service for project CRUD.
    pub project_service: Arc<ProjectService>,
}
