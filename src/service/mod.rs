//! Service layer: business logic orchestration.
//!
//! [`UserService`] and [`ProjectService`] enforce the domain invariants
//! over their stores and emit events through the
//! [`super::domain::EventBus`]; [`notifier`] is the loop draining them.

pub mod notifier;
pub mod project_service;
pub mod user_service;
pub mod validation;

pub use project_service::ProjectService;
pub use user_service::UserService;
