use crate::controller;
use crate::error::ApiResult;
use crate::models::Planet;
use crate::state::AppState;
use crate::store::Document;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

/// Returns all existing planet records.
#[utoipa::path(
    get,
    path = "/planets",
    tag = "Planets",
    responses(
        (status = 200, description = "Array of planets, including every stored key-value", body = [Planet]),
        (status = 500, description = "Store failure while fetching planets")
    )
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    controller::list::<Planet>(&state).await
}

/// Get an existing planet by its ID.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = String, Path, description = "ID of the planet to retrieve")),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = Planet),
        (status = 400, description = "Invalid planet ID"),
        (status = 404, description = "Planet not found"),
        (status = 500, description = "Store failure while fetching the planet")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Document>> {
    controller::get_by_id::<Planet>(&state, &id).await
}

/// Create a new planet. Requires name, diameter and terrain.
#[utoipa::path(
    post,
    path = "/planets",
    tag = "Planets",
    request_body = Planet,
    responses(
        (status = 201, description = "Planet created, body carries the new ID"),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Store failure while creating the planet")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, String)> {
    let confirmation = controller::create::<Planet>(&state, body).await?;
    Ok((StatusCode::CREATED, confirmation))
}

/// Merge the supplied fields into an existing planet.
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = String, Path, description = "ID of the planet to update")),
    request_body = Planet,
    responses(
        (status = 200, description = "Updated planet, re-fetched after the merge", body = Planet),
        (status = 400, description = "Invalid planet ID or empty update body"),
        (status = 404, description = "Planet not found"),
        (status = 500, description = "Store failure while updating the planet")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Document>> {
    controller::update::<Planet>(&state, &id, body).await
}

/// Delete a planet by its ID.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = String, Path, description = "ID of the planet to delete")),
    responses(
        (status = 200, description = "Planet removed, body confirms the deleted ID"),
        (status = 400, description = "Invalid planet ID"),
        (status = 404, description = "Planet not found, or any store failure")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<String> {
    controller::remove::<Planet>(&state, &id).await
}
