use crate::controller;
use crate::error::ApiResult;
use crate::models::Starship;
use crate::state::AppState;
use crate::store::Document;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

/// Returns all existing starship records.
#[utoipa::path(
    get,
    path = "/starships",
    tag = "Starships",
    responses(
        (status = 200, description = "Array of starships, including every stored key-value", body = [Starship]),
        (status = 500, description = "Store failure while fetching starships")
    )
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    controller::list::<Starship>(&state).await
}

/// Get an existing starship by its ID.
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = String, Path, description = "ID of the starship to retrieve")),
    responses(
        (status = 200, description = "Starship retrieved successfully", body = Starship),
        (status = 400, description = "Invalid starship ID"),
        (status = 404, description = "Starship not found"),
        (status = 500, description = "Store failure while fetching the starship")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Document>> {
    controller::get_by_id::<Starship>(&state, &id).await
}

/// Create a new starship. Requires name and model.
#[utoipa::path(
    post,
    path = "/starships",
    tag = "Starships",
    request_body = Starship,
    responses(
        (status = 201, description = "Starship created, body carries the new ID"),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Store failure while creating the starship")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, String)> {
    let confirmation = controller::create::<Starship>(&state, body).await?;
    Ok((StatusCode::CREATED, confirmation))
}

/// Merge the supplied fields into an existing starship.
#[utoipa::path(
    put,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = String, Path, description = "ID of the starship to update")),
    request_body = Starship,
    responses(
        (status = 200, description = "Updated starship, re-fetched after the merge", body = Starship),
        (status = 400, description = "Invalid starship ID or empty update body"),
        (status = 404, description = "Starship not found"),
        (status = 500, description = "Store failure while updating the starship")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Document>> {
    controller::update::<Starship>(&state, &id, body).await
}

/// Delete a starship by its ID.
#[utoipa::path(
    delete,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = String, Path, description = "ID of the starship to delete")),
    responses(
        (status = 200, description = "Starship removed, body confirms the deleted ID"),
        (status = 400, description = "Invalid starship ID"),
        (status = 404, description = "Starship not found, or any store failure")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<String> {
    controller::remove::<Starship>(&state, &id).await
}
