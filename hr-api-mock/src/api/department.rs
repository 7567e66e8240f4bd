//! Department routes. Responses always embed the joined roster.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::Utc;

use shared::models::{DepartmentCreate, DepartmentUpdate, DepartmentWithEmployees};

use crate::state::DepartmentRecord;
use crate::{ApiError, Db, error};

pub fn router() -> Router<Db> {
    Router::new()
        .route("/department/all/with-employees", get(list_with_employees))
        .route("/department/create", post(create))
        .route("/department/update/{id}", patch(update))
        .route("/department/delete/{id}", delete(remove))
}

async fn list_with_employees(State(db): State<Db>) -> Json<Vec<DepartmentWithEmployees>> {
    let store = db.read().await;
    Json(
        store
            .departments
            .iter()
            .map(|record| store.render_department(record))
            .collect(),
    )
}

async fn create(
    State(db): State<Db>,
    Json(payload): Json<DepartmentCreate>,
) -> Result<Json<DepartmentWithEmployees>, ApiError> {
    let mut store = db.write().await;

    if store
        .departments
        .iter()
        .any(|d| d.name.eq_ignore_ascii_case(&payload.name))
    {
        return Err(error(StatusCode::CONFLICT, "Department name already in use"));
    }

    let record = DepartmentRecord {
        id: store.alloc_id(),
        name: payload.name,
        created_at: Utc::now(),
        updated_at: None,
        member_ids: Vec::new(),
    };
    store.departments.push(record.clone());

    Ok(Json(store.render_department(&record)))
}

async fn update(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> Result<Json<DepartmentWithEmployees>, ApiError> {
    let mut store = db.write().await;

    // Reject unknown roster members before touching anything.
    for employee_id in &payload.employees {
        if store.employee(*employee_id).is_none() {
            return Err(error(
                StatusCode::BAD_REQUEST,
                format!("Employee {employee_id} not found"),
            ));
        }
    }

    // The stored roster stays free of duplicate ids.
    let mut member_ids: Vec<i64> = Vec::new();
    for employee_id in payload.employees {
        if !member_ids.contains(&employee_id) {
            member_ids.push(employee_id);
        }
    }

    let record = store
        .departments
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("Department {id} not found")))?;

    record.name = payload.name;
    record.member_ids = member_ids;
    record.updated_at = Some(Utc::now());
    let record = record.clone();

    Ok(Json(store.render_department(&record)))
}

async fn remove(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    let before = store.departments.len();
    store.departments.retain(|d| d.id != id);

    if store.departments.len() == before {
        return Err(error(StatusCode::NOT_FOUND, format!("Department {id} not found")));
    }

    Ok(StatusCode::OK)
}
