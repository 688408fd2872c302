//! Clinical resource HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use clinicals_core::Clinical;

use crate::db::AppState;
use crate::error::AppError;
use crate::services::ClinicalService;

fn service(state: &AppState) -> ClinicalService {
    ClinicalService::new(state.clinicals.clone(), state.patients.clone())
}

/// POST /clinicals - Record a new clinical measurement
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Clinical>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(patient_id = body.patient_id, component = %body.component_name, "creating clinical record");
    let created = service(&state).create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /clinicals - List all clinical records
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(service(&state).get_all().await?))
}

/// GET /clinicals/{id} - Read a clinical record
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    match service(&state).get_by_id(id).await? {
        Some(clinical) => Ok(Json(clinical)),
        None => Err(AppError::NotFound(format!("Clinical {id} not found"))),
    }
}

/// GET /clinicals/patient/{patientId} - List records for one patient
pub async fn by_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(service(&state).get_by_patient_id(patient_id).await?))
}

/// PUT /clinicals/{id} - Update a clinical record
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Clinical>,
) -> Result<impl IntoResponse, AppError> {
    let updated = service(&state).update(id, body).await?;
    Ok(Json(updated))
}

/// DELETE /clinicals/{id} - Delete a clinical record
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
