use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clinical measurement attached to exactly one patient.
///
/// `measured_date_time` may be omitted on input; the store stamps it with the
/// creation time on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinical {
    #[serde(default)]
    pub id: Option<i64>,
    pub patient_id: i64,
    pub component_name: String,
    pub component_value: String,
    #[serde(default)]
    pub measured_date_time: Option<DateTime<Utc>>,
}

impl Clinical {
    pub fn new(
        patient_id: i64,
        component_name: impl Into<String>,
        component_value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            patient_id,
            component_name: component_name.into(),
            component_value: component_value.into(),
            measured_date_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let clinical = Clinical {
            id: Some(3),
            patient_id: 7,
            component_name: "hr".into(),
            component_value: "72".into(),
            measured_date_time: None,
        };

        let json = serde_json::to_value(&clinical).unwrap();
        assert_eq!(json["patientId"], 7);
        assert_eq!(json["componentName"], "hr");
        assert_eq!(json["componentValue"], "72");
    }

    #[test]
    fn timestamp_round_trips() {
        let json = r#"{
            "patientId": 1,
            "componentName": "bp",
            "componentValue": "120/80",
            "measuredDateTime": "2024-06-01T12:30:00Z"
        }"#;

        let clinical: Clinical = serde_json::from_str(json).unwrap();
        let ts = clinical.measured_date_time.unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }
}
