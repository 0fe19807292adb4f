//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, requests};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Request API",
        version = "1.0.0",
        description = "Reserve and release books from the library catalog"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Requests
        requests::create_request,
        requests::list_requests,
        requests::get_request,
        requests::delete_request,
    ),
    components(
        schemas(
            crate::models::item::Item,
            crate::models::request::Request,
            crate::models::request::NewRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "requests", description = "Book reservation requests")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
