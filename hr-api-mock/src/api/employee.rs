//! Employee routes: paginated search plus create, patch and delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::Utc;

use shared::models::{Employee, EmployeeCreate, EmployeeListQuery, EmployeeUpdate};
use shared::response::Page;

use crate::state::paginate;
use crate::{ApiError, Db, error};

pub fn router() -> Router<Db> {
    Router::new()
        .route("/employee/get-all", get(list))
        .route("/employee/create", post(create))
        .route("/employee/update/{id}", patch(update))
        .route("/employee/delete/{id}", delete(remove))
}

async fn list(
    State(db): State<Db>,
    Query(query): Query<EmployeeListQuery>,
) -> Json<Page<Employee>> {
    let store = db.read().await;
    let needle = query.search.trim().to_lowercase();
    let matches: Vec<Employee> = store
        .employees
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    Json(paginate(&matches, query.page, query.per_page))
}

async fn create(
    State(db): State<Db>,
    Json(payload): Json<EmployeeCreate>,
) -> Result<Json<Employee>, ApiError> {
    let mut store = db.write().await;

    if store
        .employees
        .iter()
        .any(|e| e.email.eq_ignore_ascii_case(&payload.email))
    {
        return Err(error(StatusCode::CONFLICT, "Email already in use"));
    }

    let employee = Employee {
        id: store.alloc_id(),
        name: payload.name,
        email: payload.email,
        group_type: payload.group_type,
        created_at: Utc::now(),
        updated_at: None,
    };
    store.employees.push(employee.clone());

    Ok(Json(employee))
}

async fn update(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeeUpdate>,
) -> Result<Json<Employee>, ApiError> {
    let mut store = db.write().await;
    let employee = store
        .employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("Employee {id} not found")))?;

    if let Some(name) = patch.name {
        employee.name = name;
    }
    if let Some(email) = patch.email {
        employee.email = email;
    }
    if let Some(group_type) = patch.group_type {
        employee.group_type = group_type;
    }
    employee.updated_at = Some(Utc::now());

    Ok(Json(employee.clone()))
}

async fn remove(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    let before = store.employees.len();
    store.employees.retain(|e| e.id != id);

    if store.employees.len() == before {
        return Err(error(StatusCode::NOT_FOUND, format!("Employee {id} not found")));
    }

    // A deleted employee also leaves every department roster.
    for department in &mut store.departments {
        department.member_ids.retain(|member| *member != id);
    }

    Ok(StatusCode::OK)
}
