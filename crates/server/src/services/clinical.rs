//! Clinical application service.

use std::sync::Arc;

use clinicals_core::{Clinical, ClinicalRepository, DomainError, PatientRepository};

/// Orchestrates validation and persistence for clinical measurements.
/// Holds both ports: creating a measurement checks the referenced patient.
pub struct ClinicalService {
    clinicals: Arc<dyn ClinicalRepository>,
    patients: Arc<dyn PatientRepository>,
}

impl ClinicalService {
    pub fn new(clinicals: Arc<dyn ClinicalRepository>, patients: Arc<dyn PatientRepository>) -> Self {
        Self { clinicals, patients }
    }

    /// Persist a new measurement; the referenced patient must exist.
    pub async fn create(&self, clinical: Clinical) -> Result<Clinical, DomainError> {
        if self.patients.find_by_id(clinical.patient_id).await?.is_none() {
            return Err(DomainError::validation("Patient not found"));
        }
        self.clinicals.save(clinical).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Clinical>, DomainError> {
        self.clinicals.find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Clinical>, DomainError> {
        self.clinicals.find_all().await
    }

    pub async fn get_by_patient_id(&self, patient_id: i64) -> Result<Vec<Clinical>, DomainError> {
        self.clinicals.find_by_patient_id(patient_id).await
    }

    /// Overwrite the measurement fields, preserving the patient association.
    /// A missing timestamp in `data` keeps the stored one.
    pub async fn update(&self, id: i64, data: Clinical) -> Result<Clinical, DomainError> {
        let mut existing = self
            .clinicals
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Clinical not found"))?;

        existing.component_name = data.component_name;
        existing.component_value = data.component_value;
        if data.measured_date_time.is_some() {
            existing.measured_date_time = data.measured_date_time;
        }
        self.clinicals.save(existing).await
    }

    /// Idempotent; deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.clinicals.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::services::PatientService;
    use chrono::{TimeZone, Utc};
    use clinicals_core::Patient;

    fn services() -> (ClinicalService, PatientService) {
        let store = MemoryStore::new();
        let clinicals = ClinicalService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let patients = PatientService::new(Arc::new(store));
        (clinicals, patients)
    }

    async fn seed_patient(patients: &PatientService) -> i64 {
        patients
            .create(Patient::new("Ada", "Lovelace", None))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    #[tokio::test]
    async fn create_requires_existing_patient() {
        let (clinicals, _patients) = services();
        let err = clinicals.create(Clinical::new(1, "hr", "72")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Patient not found");
        assert!(clinicals.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_round_trips_and_stamps_timestamp() {
        let (clinicals, patients) = services();
        let patient_id = seed_patient(&patients).await;

        let created = clinicals
            .create(Clinical::new(patient_id, "bp", "120/80"))
            .await
            .unwrap();

        assert!(created.measured_date_time.is_some());

        let fetched = clinicals
            .get_by_id(created.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let (clinicals, _patients) = services();
        let err = clinicals
            .update(7, Clinical::new(1, "hr", "72"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_preserves_patient_association() {
        let (clinicals, patients) = services();
        let patient_id = seed_patient(&patients).await;
        let other_id = patients
            .create(Patient::new("Alan", "Turing", None))
            .await
            .unwrap()
            .id
            .unwrap();

        let created = clinicals
            .create(Clinical::new(patient_id, "hr", "72"))
            .await
            .unwrap();

        // The update body points at another patient; the association must not move
        let updated = clinicals
            .update(created.id.unwrap(), Clinical::new(other_id, "hr", "68"))
            .await
            .unwrap();

        assert_eq!(updated.patient_id, patient_id);
        assert_eq!(updated.component_value, "68");
    }

    #[tokio::test]
    async fn update_with_missing_timestamp_keeps_stored_one() {
        let (clinicals, patients) = services();
        let patient_id = seed_patient(&patients).await;

        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let mut body = Clinical::new(patient_id, "glucose", "5.4");
        body.measured_date_time = Some(ts);
        let created = clinicals.create(body).await.unwrap();

        let updated = clinicals
            .update(created.id.unwrap(), Clinical::new(patient_id, "glucose", "5.6"))
            .await
            .unwrap();

        assert_eq!(updated.measured_date_time, Some(ts));
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_noop() {
        let (clinicals, _patients) = services();
        clinicals.delete(123).await.unwrap();
    }

    #[tokio::test]
    async fn get_by_patient_id_returns_only_that_patients_records() {
        let (clinicals, patients) = services();
        let a = seed_patient(&patients).await;
        let b = patients
            .create(Patient::new("Alan", "Turing", None))
            .await
            .unwrap()
            .id
            .unwrap();

        clinicals.create(Clinical::new(a, "hr", "72")).await.unwrap();
        clinicals.create(Clinical::new(a, "bp", "120/80")).await.unwrap();
        clinicals.create(Clinical::new(b, "hr", "65")).await.unwrap();

        let records = clinicals.get_by_patient_id(a).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|c| c.patient_id == a));
    }
}
