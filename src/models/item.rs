//! Catalog item (book) model and reservation outcome

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A circulating book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i32,
    pub available: bool,
    pub title: String,
    /// RFC 3339 time of the current reservation, empty while available
    #[serde(rename = "timestamp")]
    pub reserved_at: String,
}

/// Result of trying to reserve an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationOutcome {
    /// The item was available and is now held by the new request
    Reserved { item: Item, request_id: i32 },
    /// The item was already held; nothing was written
    Unavailable { item: Item },
}

impl ReservationOutcome {
    pub fn item(&self) -> &Item {
        match self {
            ReservationOutcome::Reserved { item, .. } => item,
            ReservationOutcome::Unavailable { item } => item,
        }
    }

    pub fn into_item(self) -> Item {
        match self {
            ReservationOutcome::Reserved { item, .. } => item,
            ReservationOutcome::Unavailable { item } => item,
        }
    }

    /// Id of the request created by this call, if any
    pub fn request_id(&self) -> Option<i32> {
        match self {
            ReservationOutcome::Reserved { request_id, .. } => Some(*request_id),
            ReservationOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, ReservationOutcome::Reserved { .. })
    }
}
