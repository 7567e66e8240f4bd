//! Route modules, one per entity.

pub mod attendance;
pub mod auth;
pub mod department;
pub mod employee;
pub mod salary;

use axum::Router;

use crate::Db;

/// Full mock route table.
pub fn router() -> Router<Db> {
    Router::new()
        .merge(auth::router())
        .merge(employee::router())
        .merge(department::router())
        .merge(salary::router())
        .merge(attendance::router())
}
