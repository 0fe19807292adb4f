//! Book request endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        item::Item,
        request::{validation_message, NewRequest, Request},
    },
};

fn request_id(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("invalid request id".to_string()))
}

/// Request a book
///
/// Responds with the book in both cases: reserved by this call, or already
/// held by someone else (`available` is false either way).
#[utoipa::path(
    post,
    path = "/request",
    tag = "requests",
    request_body = NewRequest,
    responses(
        (status = 200, description = "Book reserved, or already unavailable", body = Item),
        (status = 400, description = "Invalid body, title or email", body = crate::error::ErrorResponse),
        (status = 404, description = "Requested book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    payload: Result<Json<NewRequest>, JsonRejection>,
) -> AppResult<Json<Item>> {
    let Json(request) =
        payload.map_err(|_| AppError::BadRequest("Invalid request".to_string()))?;

    request
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let outcome = state.services.requests.create_request(&request).await?;
    Ok(Json(outcome.into_item()))
}

/// List open requests
#[utoipa::path(
    get,
    path = "/request",
    tag = "requests",
    responses(
        (status = 200, description = "All open requests", body = Vec<Request>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Request>>> {
    let requests = state.services.requests.list_requests().await?;
    Ok(Json(requests))
}

/// Get a request by ID
#[utoipa::path(
    get,
    path = "/request/{id}",
    tag = "requests",
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request details", body = Request),
        (status = 400, description = "Invalid request id", body = crate::error::ErrorResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Request>> {
    let id = request_id(path)?;
    let request = state.services.requests.get_request(id).await?;
    Ok(Json(request))
}

/// Release a request, making its book available again
#[utoipa::path(
    delete,
    path = "/request/{id}",
    tag = "requests",
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request released"),
        (status = 400, description = "Invalid request id", body = crate::error::ErrorResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = request_id(path)?;
    state.services.requests.delete_request(id).await?;
    Ok(StatusCode::OK)
}
