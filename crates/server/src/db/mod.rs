mod entity;
mod mapper;
mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgClinicalRepository, PgPatientRepository, init_schema};

use std::sync::Arc;

use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;

use clinicals_core::{ClinicalRepository, PatientRepository};

/// Shared application state: one handle per repository port, plus the pool
/// for health checks when Postgres backs the store.
#[derive(Clone)]
pub struct AppState {
    pub patients: Arc<dyn PatientRepository>,
    pub clinicals: Arc<dyn ClinicalRepository>,
    pub pool: Option<Pool>,
}

impl AppState {
    /// State over the in-memory store.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            patients: Arc::new(store.clone()),
            clinicals: Arc::new(store),
            pool: None,
        }
    }

    /// State over the Postgres adapters sharing one pool.
    pub fn postgres(pool: Pool) -> Self {
        Self {
            patients: Arc::new(PgPatientRepository::new(pool.clone())),
            clinicals: Arc::new(PgClinicalRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }
}

/// Create a connection pool from a database URL
pub fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}
