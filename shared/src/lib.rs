//! Shared types for the HR admin platform
//!
//! Wire-format types used on both sides of the API: resource models,
//! auth payloads, and the response envelopes every endpoint speaks.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ErrorBody, Page, PageMeta};
