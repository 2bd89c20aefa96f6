//! CRUD handlers for `/students`.
//!
//! Bodies are taken as raw bytes so a missing or wrong `Content-Type` header
//! does not matter; only the JSON itself is checked.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use super::error::{ApiError, Operation};
use super::{not_found, AppState};
use crate::model::{is_valid_id, Record, Student, StudentDraft, StudentPatch};

/// `GET /students`: every record, in insertion order.
pub async fn list_students(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.repo().list().await)
}

/// `POST /students`: create a record, 201 with the stored record.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let value: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    let student = StudentDraft::from_json(value)
        .validate(state.zero_marks())
        .map_err(|_| ApiError::MissingFields)?;

    let created = state
        .repo()
        .create(student)
        .await
        .map_err(|e| ApiError::from_repository(e, Operation::Save))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /students/:id`: shallow-merge the body onto the record. A `null`
/// body changes nothing.
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    if !is_valid_id(&id) {
        return not_found().await;
    }

    let patch = match serde_json::from_slice(&body).and_then(StudentPatch::from_json) {
        Ok(patch) => patch,
        Err(_) => return ApiError::InvalidJson.into_response(),
    };

    match state.repo().update(&id, patch).await {
        Ok(merged) => Json(merged).into_response(),
        Err(e) => ApiError::from_repository(e, Operation::Update).into_response(),
    }
}

/// `DELETE /students/:id`
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    if !is_valid_id(&id) {
        return not_found().await;
    }

    match state.repo().delete(&id).await {
        Ok(_) => Json(json!({ "message": "Student deleted successfully" })).into_response(),
        Err(e) => ApiError::from_repository(e, Operation::Delete).into_response(),
    }
}
