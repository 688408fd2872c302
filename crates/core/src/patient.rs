use serde::{Deserialize, Serialize};

/// A patient record.
///
/// `id` is the surrogate key assigned by the store on first save; incoming
/// create requests leave it unset. Name fields default to empty strings when
/// absent from the request body so the service layer can reject them with a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: Option<i32>,
}

impl Patient {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: Option<i32>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}
