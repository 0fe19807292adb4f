//! Repository layer for database operations

pub mod catalog;
pub mod requests;
pub mod schema;

use sqlx::{Pool, Postgres};

pub use requests::ReservationStore;
pub use schema::SchemaManager;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub catalog: catalog::CatalogRepository,
    pub requests: requests::RequestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            catalog: catalog::CatalogRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn schema(&self) -> SchemaManager {
        SchemaManager::new(self.pool.clone())
    }
}
