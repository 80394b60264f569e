use crate::controller;
use crate::error::ApiResult;
use crate::models::Film;
use crate::state::AppState;
use crate::store::Document;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

/// Returns all existing film records.
#[utoipa::path(
    get,
    path = "/films",
    tag = "Films",
    responses(
        (status = 200, description = "Array of films, including every stored key-value", body = [Film]),
        (status = 500, description = "Store failure while fetching films")
    )
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    controller::list::<Film>(&state).await
}

/// Get an existing film by its ID.
#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = "Films",
    params(("id" = String, Path, description = "ID of the film to retrieve")),
    responses(
        (status = 200, description = "Film retrieved successfully", body = Film),
        (status = 400, description = "Invalid film ID"),
        (status = 404, description = "Film not found"),
        (status = 500, description = "Store failure while fetching the film")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Document>> {
    controller::get_by_id::<Film>(&state, &id).await
}

/// Create a new film. Requires title, director and release_date.
#[utoipa::path(
    post,
    path = "/films",
    tag = "Films",
    request_body = Film,
    responses(
        (status = 201, description = "Film created, body carries the new ID"),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Store failure while creating the film")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, String)> {
    let confirmation = controller::create::<Film>(&state, body).await?;
    Ok((StatusCode::CREATED, confirmation))
}

/// Merge the supplied fields into an existing film.
#[utoipa::path(
    put,
    path = "/films/{id}",
    tag = "Films",
    params(("id" = String, Path, description = "ID of the film to update")),
    request_body = Film,
    responses(
        (status = 200, description = "Updated film, re-fetched after the merge", body = Film),
        (status = 400, description = "Invalid film ID or empty update body"),
        (status = 404, description = "Film not found"),
        (status = 500, description = "Store failure while updating the film")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Document>> {
    controller::update::<Film>(&state, &id, body).await
}

/// Delete a film by its ID.
#[utoipa::path(
    delete,
    path = "/films/{id}",
    tag = "Films",
    params(("id" = String, Path, description = "ID of the film to delete")),
    responses(
        (status = 200, description = "Film removed, body confirms the deleted ID"),
        (status = 400, description = "Invalid film ID"),
        (status = 404, description = "Film not found, or any store failure")
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<String> {
    controller::remove::<Film>(&state, &id).await
}
