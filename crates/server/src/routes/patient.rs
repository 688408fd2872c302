//! Patient resource HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use clinicals_core::Patient;

use crate::db::AppState;
use crate::error::AppError;
use crate::services::PatientService;

/// POST /patients - Create a new patient
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Patient>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(first_name = %body.first_name, last_name = %body.last_name, "creating patient");
    let service = PatientService::new(state.patients.clone());
    let created = service.create(body).await?;

    tracing::info!(id = ?created.id, "created patient");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /patients - List all patients
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PatientService::new(state.patients.clone());
    let patients = service.get_all().await?;

    tracing::info!(count = patients.len(), "retrieved patients");
    Ok(Json(patients))
}

/// GET /patients/{id} - Read a patient
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if id <= 0 {
        tracing::warn!(id, "invalid patient id");
        return Err(AppError::BadRequest(format!("Invalid patient id: {id}")));
    }

    let service = PatientService::new(state.patients.clone());
    match service.get_by_id(id).await? {
        Some(patient) => Ok(Json(patient)),
        None => Err(AppError::NotFound(format!("Patient {id} not found"))),
    }
}

/// GET /patients/lastname/{lastName} - Filter by exact last name
pub async fn by_last_name(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if last_name.trim().is_empty() {
        return Err(AppError::BadRequest("Last name must not be blank".into()));
    }

    let service = PatientService::new(state.patients.clone());
    Ok(Json(service.get_by_last_name(&last_name).await?))
}

/// PUT /patients/{id} - Update a patient
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Patient>,
) -> Result<impl IntoResponse, AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!("Invalid patient id: {id}")));
    }

    let service = PatientService::new(state.patients.clone());
    let updated = service.update(id, body).await?;
    Ok(Json(updated))
}

/// DELETE /patients/{id} - Delete a patient and its clinical records
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if id <= 0 {
        tracing::warn!(id, "invalid patient id for deletion");
        return Err(AppError::BadRequest(format!("Invalid patient id: {id}")));
    }

    let service = PatientService::new(state.patients.clone());
    service.delete(id).await?;

    tracing::info!(id, "deleted patient");
    Ok(StatusCode::NO_CONTENT)
}
