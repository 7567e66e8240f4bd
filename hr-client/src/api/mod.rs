//! Typed API clients, one per server namespace
//!
//! Each client wraps the shared [`Gateway`](crate::gateway::Gateway)
//! and exposes the endpoints of its namespace. The list-backed clients
//! also implement [`PageFetcher`](crate::sync::PageFetcher) so a
//! controller can drive them.

pub mod attendance;
pub mod auth;
pub mod department;
pub mod employee;
pub mod holidays;
pub mod salary;

pub use attendance::AttendanceApi;
pub use auth::AuthApi;
pub use department::DepartmentApi;
pub use employee::EmployeeApi;
pub use holidays::HolidayApi;
pub use salary::SalaryApi;
