//! Persistence entities: the storage-layer representation of the domain
//! models. Never exposed over HTTP.

use chrono::{DateTime, Utc};
use tokio_postgres::Row;

/// Row of the `patient` table.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
}

impl PatientEntity {
    /// Decode from a `SELECT id, first_name, last_name, age` row.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get(0),
            first_name: row.get(1),
            last_name: row.get(2),
            age: row.get(3),
        }
    }
}

/// Row of the `clinicaldata` table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalEntity {
    pub id: i64,
    pub patient_id: i64,
    pub component_name: String,
    pub component_value: String,
    pub measured_date_time: DateTime<Utc>,
}

impl ClinicalEntity {
    /// Decode from a `SELECT id, patient_id, component_name, component_value,
    /// measured_date_time` row.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get(0),
            patient_id: row.get(1),
            component_name: row.get(2),
            component_value: row.get(3),
            measured_date_time: row.get(4),
        }
    }
}
