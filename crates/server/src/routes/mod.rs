mod clinical;
pub mod health;
mod patient;

use axum::{Router, routing::get};

use crate::db::AppState;

/// Build the patient and clinical resource routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/patients", get(patient::list).post(patient::create))
        .route(
            "/patients/{id}",
            get(patient::read)
                .put(patient::update)
                .delete(patient::delete),
        )
        .route("/patients/lastname/{last_name}", get(patient::by_last_name))
        .route("/clinicals", get(clinical::list).post(clinical::create))
        .route(
            "/clinicals/{id}",
            get(clinical::read)
                .put(clinical::update)
                .delete(clinical::delete),
        )
        .route("/clinicals/patient/{patient_id}", get(clinical::by_patient))
}
