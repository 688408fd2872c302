//! clinicals-core: domain models and persistence ports
//!
//! This crate provides the types shared across the clinicals server:
//! the `Patient` and `Clinical` domain models, the `DomainError` type,
//! and the repository port traits the service layer depends on.

pub mod clinical;
pub mod error;
pub mod patient;
pub mod repository;

pub use clinical::Clinical;
pub use error::DomainError;
pub use patient::Patient;
pub use repository::{ClinicalRepository, PatientRepository};
