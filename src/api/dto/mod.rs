//! Data Transfer Objects for REST request/response serialization.
//!
//! Identifiers are serialized as UUID strings; task priority and status
//! travel as the numeric codes of the inherited wire contract.

pub mod common_dto;
pub mod project_dto;
pub mod user_dto;

pub use common_dto::*;
pub use project_dto::*;
pub use user_dto::*;
