//! Business logic services

pub mod catalog;
pub mod requests;

use std::sync::Arc;

use crate::repository::{Repository, ReservationStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub requests: requests::RequestsService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository) -> Self {
        let store = Arc::new(repository.requests.clone());
        Self::with_store(repository, store)
    }

    /// Create services with a custom reservation store
    pub fn with_store(repository: Repository, store: Arc<dyn ReservationStore>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository),
            requests: requests::RequestsService::new(store),
        }
    }
}
