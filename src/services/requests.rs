//! Request management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        item::ReservationOutcome,
        request::{NewRequest, Request},
    },
    repository::ReservationStore,
};

#[derive(Clone)]
pub struct RequestsService {
    store: Arc<dyn ReservationStore>,
}

impl RequestsService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// Reserve a book for a patron
    pub async fn create_request(&self, request: &NewRequest) -> AppResult<ReservationOutcome> {
        let outcome = self.store.create_request(request).await?;

        match &outcome {
            ReservationOutcome::Reserved { item, request_id } => {
                tracing::info!(title = %item.title, request_id, "Book reserved");
            }
            ReservationOutcome::Unavailable { item } => {
                tracing::info!(
                    title = %item.title,
                    reserved_at = %item.reserved_at,
                    "Book already reserved"
                );
            }
        }

        Ok(outcome)
    }

    pub async fn get_request(&self, id: i32) -> AppResult<Request> {
        self.store.get_request(id).await
    }

    pub async fn list_requests(&self) -> AppResult<Vec<Request>> {
        self.store.list_requests().await
    }

    /// Release a request, making its book available again
    pub async fn delete_request(&self, id: i32) -> AppResult<()> {
        self.store.delete_request(id).await?;
        tracing::info!(request_id = id, "Request released");
        Ok(())
    }
}
