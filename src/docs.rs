//! Generated API documentation.
//!
//! The OpenAPI document is assembled from the `#[utoipa::path]` annotations
//! on the route handlers and the `ToSchema` derives on the resource models,
//! and served as JSON by the process itself.

use crate::models::{Film, Planet, Starship};
use crate::routes;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holocron API",
        description = "REST catalog of films, planets, and starships"
    ),
    paths(
        routes::films::list,
        routes::films::get_by_id,
        routes::films::create,
        routes::films::update,
        routes::films::remove,
        routes::planets::list,
        routes::planets::get_by_id,
        routes::planets::create,
        routes::planets::update,
        routes::planets::remove,
        routes::starships::list,
        routes::starships::get_by_id,
        routes::starships::create,
        routes::starships::update,
        routes::starships::remove,
    ),
    components(schemas(Film, Planet, Starship)),
    tags(
        (name = "Films", description = "Operations related to films"),
        (name = "Planets", description = "Operations related to planets"),
        (name = "Starships", description = "Operations related to starships")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/films",
            "/films/{id}",
            "/planets",
            "/planets/{id}",
            "/starships",
            "/starships/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn document_carries_resource_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        for schema in ["Film", "Planet", "Starship"] {
            assert!(components.schemas.contains_key(schema), "missing {schema}");
        }
    }
}
