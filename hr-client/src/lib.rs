//! HR admin API client
//!
//! Authenticated resource clients plus the synchronization layer the
//! list views sit on: debounced search with stale-response
//! supersession, confirm-then-apply mutations, and batched department
//! membership editing.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;
pub mod sync;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use gateway::Gateway;
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginEmployee, LoginRequest, LoginResponse};
pub use shared::models;
pub use shared::response::{ErrorBody, Page, PageMeta};
