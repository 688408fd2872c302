//! Repository ports: the persistence contracts the service layer depends on,
//! independent of storage technology.

use async_trait::async_trait;

use crate::{Clinical, DomainError, Patient};

/// Persistence port for patients.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Insert when `patient.id` is unset (assigning an id), update otherwise.
    async fn save(&self, patient: Patient) -> Result<Patient, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, DomainError>;

    /// All patients, order unspecified.
    async fn find_all(&self) -> Result<Vec<Patient>, DomainError>;

    /// Exact, case-sensitive last-name match.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Patient>, DomainError>;

    /// Idempotent: deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}

/// Persistence port for clinical measurements.
#[async_trait]
pub trait ClinicalRepository: Send + Sync {
    /// Insert or update. The adapter resolves `clinical.patient_id` to a
    /// stored patient before persisting and fails with `NotFound` when the
    /// reference is dangling.
    async fn save(&self, clinical: Clinical) -> Result<Clinical, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Clinical>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Clinical>, DomainError>;

    async fn find_by_patient_id(&self, patient_id: i64) -> Result<Vec<Clinical>, DomainError>;

    /// Idempotent: deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
