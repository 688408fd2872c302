mod clinical;
mod patient;

pub use clinical::ClinicalService;
pub use patient::PatientService;
