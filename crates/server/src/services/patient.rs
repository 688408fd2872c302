//! Patient application service.

use std::sync::Arc;

use clinicals_core::{DomainError, Patient, PatientRepository};

/// Orchestrates validation and persistence for patients.
pub struct PatientService {
    repo: Arc<dyn PatientRepository>,
}

impl PatientService {
    pub fn new(repo: Arc<dyn PatientRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new patient. Both names must be present and non-blank.
    pub async fn create(&self, patient: Patient) -> Result<Patient, DomainError> {
        if patient.first_name.trim().is_empty() || patient.last_name.trim().is_empty() {
            return Err(DomainError::validation(
                "First name and last name are required",
            ));
        }
        self.repo.save(patient).await
    }

    /// Absence is an empty result, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Patient>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_by_last_name(&self, last_name: &str) -> Result<Vec<Patient>, DomainError> {
        self.repo.find_by_last_name(last_name).await
    }

    /// Overwrite names and age on the stored record, preserving identity.
    pub async fn update(&self, id: i64, data: Patient) -> Result<Patient, DomainError> {
        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Patient not found"))?;

        existing.first_name = data.first_name;
        existing.last_name = data.last_name;
        existing.age = data.age;
        self.repo.save(existing).await
    }

    /// Idempotent; deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn service() -> PatientService {
        PatientService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let service = service();
        let created = service
            .create(Patient::new("Ada", "Lovelace", Some(36)))
            .await
            .unwrap();

        let id = created.id.expect("id assigned on create");
        let fetched = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn blank_last_name_is_rejected_and_nothing_persisted() {
        let service = service();
        let err = service
            .create(Patient::new("Ada", "   ", None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "First name and last name are required");
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_first_name_is_rejected() {
        let service = service();
        let err = service
            .create(Patient::new("", "Lovelace", None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let service = service();
        let err = service
            .update(42, Patient::new("A", "B", None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_fields_in_place() {
        let service = service();
        let created = service
            .create(Patient::new("Ada", "Lovelace", Some(36)))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let updated = service
            .update(id, Patient::new("Augusta", "King", Some(37)))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.last_name, "King");
        assert_eq!(updated.age, Some(37));
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_noop() {
        let service = service();
        service.delete(99).await.unwrap();
    }

    #[tokio::test]
    async fn last_name_filter_returns_matching_subset() {
        let service = service();
        service.create(Patient::new("Grace", "Hopper", None)).await.unwrap();
        service.create(Patient::new("Ada", "Lovelace", None)).await.unwrap();
        service.create(Patient::new("Henry", "Hopper", None)).await.unwrap();

        let hoppers = service.get_by_last_name("Hopper").await.unwrap();
        assert_eq!(hoppers.len(), 2);
        assert!(hoppers.iter().all(|p| p.last_name == "Hopper"));
    }
}
