//! Postgres repository adapters.

use async_trait::async_trait;
use deadpool_postgres::Pool;

use clinicals_core::{Clinical, ClinicalRepository, DomainError, Patient, PatientRepository};

use super::entity::{ClinicalEntity, PatientEntity};
use super::mapper;

/// Create the tables if they do not exist yet. Clinical rows are dropped with
/// their patient (`ON DELETE CASCADE`), the relation being owned by Patient.
pub async fn init_schema(pool: &Pool) -> Result<(), DomainError> {
    let client = pool.get().await.map_err(pool_err)?;
    client
        .batch_execute(
            r#"
            CREATE TABLE IF NOT EXISTS patient (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                age INTEGER
            );
            CREATE TABLE IF NOT EXISTS clinicaldata (
                id BIGSERIAL PRIMARY KEY,
                patient_id BIGINT NOT NULL REFERENCES patient (id) ON DELETE CASCADE,
                component_name TEXT NOT NULL,
                component_value TEXT NOT NULL,
                measured_date_time TIMESTAMPTZ NOT NULL DEFAULT now()
            );
            "#,
        )
        .await
        .map_err(db_err)
}

fn pool_err(err: deadpool_postgres::PoolError) -> DomainError {
    DomainError::Storage(format!("pool error: {err}"))
}

fn db_err(err: tokio_postgres::Error) -> DomainError {
    DomainError::Storage(format!("database error: {err}"))
}

/// Postgres adapter for the patient port.
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: Pool,
}

impl PgPatientRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn save(&self, patient: Patient) -> Result<Patient, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let row = match patient.id {
            None => client
                .query_one(
                    "INSERT INTO patient (first_name, last_name, age) \
                     VALUES ($1, $2, $3) \
                     RETURNING id, first_name, last_name, age",
                    &[&patient.first_name, &patient.last_name, &patient.age],
                )
                .await
                .map_err(db_err)?,
            Some(id) => client
                .query_opt(
                    "UPDATE patient SET first_name = $1, last_name = $2, age = $3 \
                     WHERE id = $4 \
                     RETURNING id, first_name, last_name, age",
                    &[&patient.first_name, &patient.last_name, &patient.age, &id],
                )
                .await
                .map_err(db_err)?
                .ok_or_else(|| DomainError::not_found("Patient not found"))?,
        };

        Ok(mapper::patient_to_domain(PatientEntity::from_row(&row)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let row = client
            .query_opt(
                "SELECT id, first_name, last_name, age FROM patient WHERE id = $1",
                &[&id],
            )
            .await
            .map_err(db_err)?;

        Ok(row.map(|row| mapper::patient_to_domain(PatientEntity::from_row(&row))))
    }

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let rows = client
            .query("SELECT id, first_name, last_name, age FROM patient", &[])
            .await
            .map_err(db_err)?;

        Ok(rows
            .iter()
            .map(|row| mapper::patient_to_domain(PatientEntity::from_row(row)))
            .collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Patient>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let rows = client
            .query(
                "SELECT id, first_name, last_name, age FROM patient WHERE last_name = $1",
                &[&last_name],
            )
            .await
            .map_err(db_err)?;

        Ok(rows
            .iter()
            .map(|row| mapper::patient_to_domain(PatientEntity::from_row(row)))
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        client
            .execute("DELETE FROM patient WHERE id = $1", &[&id])
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

/// Postgres adapter for the clinical port. `save` resolves the patient
/// reference before writing, independently of the service-level check.
#[derive(Clone)]
pub struct PgClinicalRepository {
    pool: Pool,
}

impl PgClinicalRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClinicalRepository for PgClinicalRepository {
    async fn save(&self, clinical: Clinical) -> Result<Clinical, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;

        // Resolve the patient foreign key first
        let patient = client
            .query_opt("SELECT id FROM patient WHERE id = $1", &[&clinical.patient_id])
            .await
            .map_err(db_err)?;
        if patient.is_none() {
            return Err(DomainError::not_found("Patient not found"));
        }

        let row = match clinical.id {
            None => client
                .query_one(
                    "INSERT INTO clinicaldata \
                     (patient_id, component_name, component_value, measured_date_time) \
                     VALUES ($1, $2, $3, COALESCE($4, now())) \
                     RETURNING id, patient_id, component_name, component_value, \
                     measured_date_time",
                    &[
                        &clinical.patient_id,
                        &clinical.component_name,
                        &clinical.component_value,
                        &clinical.measured_date_time,
                    ],
                )
                .await
                .map_err(db_err)?,
            Some(id) => client
                .query_opt(
                    "UPDATE clinicaldata SET patient_id = $1, component_name = $2, \
                     component_value = $3, \
                     measured_date_time = COALESCE($4, measured_date_time) \
                     WHERE id = $5 \
                     RETURNING id, patient_id, component_name, component_value, \
                     measured_date_time",
                    &[
                        &clinical.patient_id,
                        &clinical.component_name,
                        &clinical.component_value,
                        &clinical.measured_date_time,
                        &id,
                    ],
                )
                .await
                .map_err(db_err)?
                .ok_or_else(|| DomainError::not_found("Clinical not found"))?,
        };

        Ok(mapper::clinical_to_domain(ClinicalEntity::from_row(&row)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Clinical>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let row = client
            .query_opt(
                "SELECT id, patient_id, component_name, component_value, measured_date_time \
                 FROM clinicaldata WHERE id = $1",
                &[&id],
            )
            .await
            .map_err(db_err)?;

        Ok(row.map(|row| mapper::clinical_to_domain(ClinicalEntity::from_row(&row))))
    }

    async fn find_all(&self) -> Result<Vec<Clinical>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let rows = client
            .query(
                "SELECT id, patient_id, component_name, component_value, measured_date_time \
                 FROM clinicaldata",
                &[],
            )
            .await
            .map_err(db_err)?;

        Ok(rows
            .iter()
            .map(|row| mapper::clinical_to_domain(ClinicalEntity::from_row(row)))
            .collect())
    }

    async fn find_by_patient_id(&self, patient_id: i64) -> Result<Vec<Clinical>, DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        let rows = client
            .query(
                "SELECT id, patient_id, component_name, component_value, measured_date_time \
                 FROM clinicaldata WHERE patient_id = $1",
                &[&patient_id],
            )
            .await
            .map_err(db_err)?;

        Ok(rows
            .iter()
            .map(|row| mapper::clinical_to_domain(ClinicalEntity::from_row(row)))
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let client = self.pool.get().await.map_err(pool_err)?;
        client
            .execute("DELETE FROM clinicaldata WHERE id = $1", &[&id])
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
