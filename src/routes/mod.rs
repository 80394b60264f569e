//! HTTP route handlers.
//!
//! One module per resource collection plus health probes. The resource
//! modules are thin wrappers over the generic controller; they exist to give
//! each endpoint a concrete function carrying its OpenAPI annotation.

pub mod films;
pub mod health;
pub mod planets;
pub mod starships;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info, served at the root path.
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Holocron API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api-docs/openapi.json",
        "endpoints": [
            "/films",
            "/films/{id}",
            "/planets",
            "/planets/{id}",
            "/starships",
            "/starships/{id}",
            "/health",
            "/ready"
        ]
    }))
}

/// Fallback for undefined routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
