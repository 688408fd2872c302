//! In-memory repository adapters.
//!
//! Backs the same ports as the Postgres adapters with a process-local table
//! set. Used when no `DATABASE_URL` is configured and by the test suite.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use clinicals_core::{Clinical, ClinicalRepository, DomainError, Patient, PatientRepository};

use super::entity::{ClinicalEntity, PatientEntity};
use super::mapper;

#[derive(Debug, Default)]
struct Tables {
    patients: BTreeMap<i64, PatientEntity>,
    clinicals: BTreeMap<i64, ClinicalEntity>,
    next_patient_id: i64,
    next_clinical_id: i64,
}

/// Shared in-memory store. Cloning hands out another handle to the same
/// tables; the one type implements both repository ports.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for MemoryStore {
    async fn save(&self, patient: Patient) -> Result<Patient, DomainError> {
        let mut tables = self.tables.write().expect("store lock poisoned");
        let id = match patient.id {
            None => {
                tables.next_patient_id += 1;
                tables.next_patient_id
            }
            Some(id) => {
                if !tables.patients.contains_key(&id) {
                    return Err(DomainError::not_found("Patient not found"));
                }
                id
            }
        };

        let entity = mapper::patient_to_entity(&patient, id);
        let stored = mapper::patient_to_domain(entity.clone());
        tables.patients.insert(id, entity);
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .patients
            .get(&id)
            .cloned()
            .map(mapper::patient_to_domain))
    }

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .patients
            .values()
            .cloned()
            .map(mapper::patient_to_domain)
            .collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Patient>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .patients
            .values()
            .filter(|entity| entity.last_name == last_name)
            .cloned()
            .map(mapper::patient_to_domain)
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut tables = self.tables.write().expect("store lock poisoned");
        if tables.patients.remove(&id).is_some() {
            // Clinical records are owned by their patient
            tables.clinicals.retain(|_, entity| entity.patient_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl ClinicalRepository for MemoryStore {
    async fn save(&self, clinical: Clinical) -> Result<Clinical, DomainError> {
        let mut tables = self.tables.write().expect("store lock poisoned");

        // Resolve the patient foreign key first
        if !tables.patients.contains_key(&clinical.patient_id) {
            return Err(DomainError::not_found("Patient not found"));
        }

        let id = match clinical.id {
            None => {
                tables.next_clinical_id += 1;
                tables.next_clinical_id
            }
            Some(id) => {
                if !tables.clinicals.contains_key(&id) {
                    return Err(DomainError::not_found("Clinical not found"));
                }
                id
            }
        };

        let entity = mapper::clinical_to_entity(&clinical, id);
        let stored = mapper::clinical_to_domain(entity.clone());
        tables.clinicals.insert(id, entity);
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Clinical>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .clinicals
            .get(&id)
            .cloned()
            .map(mapper::clinical_to_domain))
    }

    async fn find_all(&self) -> Result<Vec<Clinical>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .clinicals
            .values()
            .cloned()
            .map(mapper::clinical_to_domain)
            .collect())
    }

    async fn find_by_patient_id(&self, patient_id: i64) -> Result<Vec<Clinical>, DomainError> {
        let tables = self.tables.read().expect("store lock poisoned");
        Ok(tables
            .clinicals
            .values()
            .filter(|entity| entity.patient_id == patient_id)
            .cloned()
            .map(mapper::clinical_to_domain)
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut tables = self.tables.write().expect("store lock poisoned");
        tables.clinicals.remove(&id);
        Ok(())
    }
}
