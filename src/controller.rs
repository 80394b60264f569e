//! Generic CRUD controller.
//!
//! One implementation of the five operations shared by every resource type,
//! parameterized by a [`Resource`] descriptor: names for error and
//! confirmation bodies, the create payload carrying the required-field
//! subset, and the collection the resource lives in. The per-resource route
//! modules are thin wrappers over these functions.
//!
//! Each operation is a single request/response transaction against the
//! store; no state is held across requests.

use crate::error::{ApiError, ApiResult};
use crate::oid::ObjectId;
use crate::state::AppState;
use crate::store::{Collection, Document};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Structural check over a create payload.
pub trait CreatePayload {
    /// True when every required field is present and truthy: strings
    /// non-empty, numbers non-zero.
    fn has_required(&self) -> bool;
}

/// Descriptor wiring a resource type into the generic controller.
pub trait Resource: Send + Sync + 'static {
    /// Lowercase singular, as it appears in validation messages ("film").
    const SINGULAR: &'static str;
    /// Capitalized singular, as it appears in not-found and confirmation
    /// bodies ("Film").
    const TITLE: &'static str;
    /// Collection name and URL segment ("films").
    const PLURAL: &'static str;

    /// Create payload carrying the required subset.
    type Create: DeserializeOwned + CreatePayload;

    /// The collection this resource is stored in.
    fn collection(state: &AppState) -> &Collection;
}

fn parse_id<R: Resource>(id: &str) -> ApiResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId(R::SINGULAR))
}

/// Fetch every record in the resource's collection.
pub async fn list<R: Resource>(state: &AppState) -> ApiResult<Json<Vec<Document>>> {
    let records = R::collection(state).find_all().await?;
    Ok(Json(records))
}

/// Fetch one record by identifier.
pub async fn get_by_id<R: Resource>(state: &AppState, id: &str) -> ApiResult<Json<Document>> {
    let id = parse_id::<R>(id)?;
    match R::collection(state).find_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound(R::TITLE)),
    }
}

/// Validate the required subset, then insert. Unknown body fields are stored
/// as-is; the store assigns the identifier. The store is never touched when
/// validation fails.
pub async fn create<R: Resource>(state: &AppState, body: Value) -> ApiResult<String> {
    let Value::Object(record) = body else {
        return Err(ApiError::MissingRequiredField);
    };
    let payload: R::Create = serde_json::from_value(Value::Object(record.clone()))
        .map_err(|_| ApiError::MissingRequiredField)?;
    if !payload.has_required() {
        return Err(ApiError::MissingRequiredField);
    }

    match R::collection(state).insert(record).await {
        Ok(id) => Ok(format!("{} created with id: {id}", R::TITLE)),
        Err(source) => Err(ApiError::CreateFailed {
            resource: R::SINGULAR,
            source,
        }),
    }
}

/// Merge the supplied fields into the matching record and return the
/// post-update value, re-fetched after the merge. The empty-body check runs
/// before identifier validation, and both run before any store call.
///
/// The merge and the re-fetch are two separate store calls with no lock in
/// between; a concurrent delete in that window surfaces as a 404.
pub async fn update<R: Resource>(
    state: &AppState,
    id: &str,
    body: Value,
) -> ApiResult<Json<Document>> {
    let patch = match body {
        Value::Object(patch) if !patch.is_empty() => patch,
        _ => return Err(ApiError::EmptyUpdate),
    };
    let id = parse_id::<R>(id)?;

    let collection = R::collection(state);
    if !collection.update_by_id(&id, patch).await? {
        return Err(ApiError::MutationTargetMissing(R::TITLE));
    }
    match collection.find_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::MutationTargetMissing(R::TITLE)),
    }
}

/// Delete the matching record. Store faults are reported as not-found, the
/// same as a missing record; there is no 500 path here.
pub async fn remove<R: Resource>(state: &AppState, id: &str) -> ApiResult<String> {
    let id = parse_id::<R>(id)?;
    match R::collection(state).delete_by_id(&id).await {
        Ok(true) => Ok(format!("{} with id {id} removed successfully", R::TITLE)),
        Ok(false) => Err(ApiError::MutationTargetMissing(R::TITLE)),
        Err(source) => {
            tracing::warn!(error = %source, resource = R::SINGULAR, "delete failed, reporting not found");
            Err(ApiError::DeleteMasked)
        }
    }
}
