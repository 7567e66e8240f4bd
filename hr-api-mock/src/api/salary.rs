//! Salary routes. The amount on an existing record never changes,
//! only the frequency and effective date accept patches.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::Utc;

use shared::models::{Salary, SalaryCreate, SalaryUpdate};

use crate::{ApiError, Db, error};

pub fn router() -> Router<Db> {
    Router::new()
        .route("/salary/history", get(history))
        .route("/salary/create", post(create))
        .route("/salary/update/{id}", patch(update))
        .route("/salary/delete/{id}", delete(remove))
}

async fn history(State(db): State<Db>) -> Json<Vec<Salary>> {
    Json(db.read().await.salaries.clone())
}

async fn create(
    State(db): State<Db>,
    Json(payload): Json<SalaryCreate>,
) -> Result<Json<Salary>, ApiError> {
    let mut store = db.write().await;

    if store.employee(payload.employee_id).is_none() {
        return Err(error(
            StatusCode::NOT_FOUND,
            format!("Employee {} not found", payload.employee_id),
        ));
    }

    let salary = Salary {
        id: store.alloc_id(),
        amount: payload.amount,
        pay_frequency: payload.pay_frequency,
        employee_id: payload.employee_id,
        effective_date: payload.effective_date,
        created_at: Utc::now(),
        updated_at: None,
    };
    store.salaries.push(salary.clone());

    Ok(Json(salary))
}

async fn update(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(patch): Json<SalaryUpdate>,
) -> Result<Json<Salary>, ApiError> {
    let mut store = db.write().await;
    let salary = store
        .salaries
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("Salary {id} not found")))?;

    if let Some(pay_frequency) = patch.pay_frequency {
        salary.pay_frequency = pay_frequency;
    }
    if let Some(effective_date) = patch.effective_date {
        salary.effective_date = effective_date;
    }
    salary.updated_at = Some(Utc::now());

    Ok(Json(salary.clone()))
}

async fn remove(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    let before = store.salaries.len();
    store.salaries.retain(|s| s.id != id);

    if store.salaries.len() == before {
        return Err(error(StatusCode::NOT_FOUND, format!("Salary {id} not found")));
    }

    Ok(StatusCode::OK)
}
