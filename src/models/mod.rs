//! Data models for the library request service

pub mod item;
pub mod request;

// Re-export commonly used types
pub use item::{Item, ReservationOutcome};
pub use request::{NewRequest, Request};
