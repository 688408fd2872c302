//! Pure mappers between domain models and persistence entities.

use chrono::Utc;
use clinicals_core::{Clinical, Patient};

use super::entity::{ClinicalEntity, PatientEntity};

pub fn patient_to_domain(entity: PatientEntity) -> Patient {
    Patient {
        id: Some(entity.id),
        first_name: entity.first_name,
        last_name: entity.last_name,
        age: entity.age,
    }
}

/// `id` is the key the entity is stored under: the existing id on update, the
/// freshly assigned one on insert.
pub fn patient_to_entity(patient: &Patient, id: i64) -> PatientEntity {
    PatientEntity {
        id,
        first_name: patient.first_name.clone(),
        last_name: patient.last_name.clone(),
        age: patient.age,
    }
}

pub fn clinical_to_domain(entity: ClinicalEntity) -> Clinical {
    Clinical {
        id: Some(entity.id),
        patient_id: entity.patient_id,
        component_name: entity.component_name,
        component_value: entity.component_value,
        measured_date_time: Some(entity.measured_date_time),
    }
}

/// A missing timestamp is stamped with the current time, the entity column
/// being a non-optional creation timestamp.
pub fn clinical_to_entity(clinical: &Clinical, id: i64) -> ClinicalEntity {
    ClinicalEntity {
        id,
        patient_id: clinical.patient_id,
        component_name: clinical.component_name.clone(),
        component_value: clinical.component_value.clone(),
        measured_date_time: clinical.measured_date_time.unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn patient_round_trip_preserves_fields() {
        let patient = Patient::new("Ada", "Lovelace", Some(36));
        let entity = patient_to_entity(&patient, 5);
        let back = patient_to_domain(entity);

        assert_eq!(back.id, Some(5));
        assert_eq!(back.first_name, "Ada");
        assert_eq!(back.last_name, "Lovelace");
        assert_eq!(back.age, Some(36));
    }

    #[test]
    fn clinical_round_trip_preserves_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut clinical = Clinical::new(7, "bp", "120/80");
        clinical.measured_date_time = Some(ts);

        let entity = clinical_to_entity(&clinical, 3);
        assert_eq!(entity.measured_date_time, ts);

        let back = clinical_to_domain(entity);
        assert_eq!(back.id, Some(3));
        assert_eq!(back.patient_id, 7);
        assert_eq!(back.component_name, "bp");
        assert_eq!(back.component_value, "120/80");
        assert_eq!(back.measured_date_time, Some(ts));
    }

    #[test]
    fn missing_timestamp_is_stamped() {
        let before = Utc::now();
        let entity = clinical_to_entity(&Clinical::new(1, "hr", "72"), 1);
        let after = Utc::now();

        assert!(entity.measured_date_time >= before);
        assert!(entity.measured_date_time <= after);
    }
}
