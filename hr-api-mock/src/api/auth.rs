//! Login endpoint. Mints a bearer token for the seed admin account.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use shared::client::{LoginEmployee, LoginRequest, LoginResponse};
use shared::models::GroupType;

use crate::{ADMIN_EMAIL, ADMIN_PASSWORD, ApiError, Db, error};

pub fn router() -> Router<Db> {
    Router::new().route("/auth/login", post(login))
}

async fn login(
    State(db): State<Db>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.email != ADMIN_EMAIL || request.password != ADMIN_PASSWORD {
        return Err(error(StatusCode::UNAUTHORIZED, "Invalid email or password"));
    }

    let token = db.write().await.mint_token();
    tracing::debug!(email = %request.email, "login accepted");

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        employee: LoginEmployee {
            id: 1,
            name: "Admin".to_string(),
            email: ADMIN_EMAIL.to_string(),
            group: GroupType::Hr,
        },
    }))
}
