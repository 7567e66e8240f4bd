//! Resource models
//!
//! Shared between hr-client and hr-api-mock.
//! All IDs are `i64`, all wire field names are camelCase.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod holiday;
pub mod salary;

// Re-exports
pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use holiday::*;
pub use salary::*;
