//! Attendance routes: day-scoped listing, check-in and status patch.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::Utc;

use shared::models::{
    Attendance, AttendanceCreate, AttendanceEmployee, AttendanceListQuery, AttendanceStatusUpdate,
};
use shared::response::Page;

use crate::state::paginate;
use crate::{ApiError, Db, error};

pub fn router() -> Router<Db> {
    Router::new()
        .route("/attendance/get-by-date", get(list_by_date))
        .route("/attendance/create", post(create))
        .route("/attendance/update/{id}", patch(update_status))
}

async fn list_by_date(
    State(db): State<Db>,
    Query(query): Query<AttendanceListQuery>,
) -> Json<Page<Attendance>> {
    let store = db.read().await;
    let matches: Vec<Attendance> = store
        .attendance
        .iter()
        .filter(|a| a.date == query.date)
        .cloned()
        .collect();

    Json(paginate(&matches, query.page, query.per_page))
}

async fn create(
    State(db): State<Db>,
    Json(payload): Json<AttendanceCreate>,
) -> Result<Json<Attendance>, ApiError> {
    let mut store = db.write().await;

    let employee = match store.employee(payload.employee_id) {
        Some(e) => AttendanceEmployee {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
        },
        None => {
            return Err(error(
                StatusCode::NOT_FOUND,
                format!("Employee {} not found", payload.employee_id),
            ));
        }
    };

    if store
        .attendance
        .iter()
        .any(|a| a.employee_id == payload.employee_id && a.date == payload.date)
    {
        return Err(error(
            StatusCode::CONFLICT,
            "Attendance already recorded for this employee on that date",
        ));
    }

    let record = Attendance {
        id: store.alloc_id(),
        date: payload.date,
        status: payload.status,
        employee_id: payload.employee_id,
        created_at: Utc::now(),
        updated_at: None,
        employee,
    };
    store.attendance.push(record.clone());

    Ok(Json(record))
}

async fn update_status(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(patch): Json<AttendanceStatusUpdate>,
) -> Result<Json<Attendance>, ApiError> {
    let mut store = db.write().await;
    let record = store
        .attendance
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("Attendance {id} not found")))?;

    record.status = patch.status;
    record.updated_at = Some(Utc::now());

    Ok(Json(record.clone()))
}
