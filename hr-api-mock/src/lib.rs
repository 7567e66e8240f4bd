//! In-memory stand-in for the HR backend.
//!
//! Speaks the same wire contract as the real service: bearer-guarded
//! routes, camelCase JSON bodies, `{ "message": ... }` error payloads
//! and paginated list envelopes. State lives in a [`MockStore`] behind
//! an `Arc<RwLock<..>>` so tests can drive it from multiple tasks.

pub mod api;
pub mod state;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use shared::response::ErrorBody;

pub use state::MockStore;

/// Seed account accepted by `/auth/login`.
pub const ADMIN_EMAIL: &str = "admin@hr.local";
pub const ADMIN_PASSWORD: &str = "admin123";

pub type Db = Arc<RwLock<MockStore>>;

/// Every error response carries the `{ "message": ... }` body.
pub(crate) type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(message)))
}

/// Router over a fresh store.
pub fn app() -> Router {
    app_with_db(Arc::new(RwLock::new(MockStore::default())))
}

/// Router over a caller-provided store.
pub fn app_with_db(db: Db) -> Router {
    api::router()
        .layer(middleware::from_fn_with_state(db.clone(), require_bearer))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Every route except login requires a token minted by `/auth/login`.
async fn require_bearer(
    State(db): State<Db>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if req.uri().path() == "/auth/login" {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let authorized = match token {
        Some(token) => db.read().await.token_valid(token),
        None => false,
    };

    if authorized {
        Ok(next.run(req).await)
    } else {
        tracing::debug!(path = %req.uri().path(), "rejecting unauthenticated request");
        Err(error(StatusCode::UNAUTHORIZED, "Missing or invalid bearer token"))
    }
}
