//! Patron request (ledger entry) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// An open request holding one catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub id: i32,
    pub email: String,
    /// Title of the held item
    pub title: String,
}

/// Create request payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Must supply a title"))]
    pub title: String,
}

impl NewRequest {
    pub fn new(email: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            title: title.into(),
        }
    }
}

/// First user-facing message of a failed validation, title before email
pub fn validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["title", "email"]
        .iter()
        .filter_map(|field| fields.get(field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}
