//! Shared helpers for integration tests: request plumbing and store doubles.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use holocron::oid::ObjectId;
use holocron::store::{Document, DocumentStore, MemoryStore, StoreError, StoreResult};
use holocron::{build_router, AppState, ServerConfig};
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Config with startup seeding disabled so tests control their own data.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        seed_on_startup: false,
        ..ServerConfig::default()
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_config())
}

pub fn test_app() -> Router {
    build_router(test_state())
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::with_store(test_config(), store))
}

/// Drive one request through the router and collect status plus body text.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Extract the identifier from a "created with id: <id>" confirmation body.
pub fn id_from_confirmation(body: &str) -> String {
    body.rsplit(' ').next().unwrap_or_default().to_string()
}

/// Store double that counts every call before delegating to a real
/// in-memory store. Used to verify that validation failures never reach the
/// store.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.bump();
        self.inner.find_all(collection).await
    }

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Option<Document>> {
        self.bump();
        self.inner.find_by_id(collection, id).await
    }

    async fn insert(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        self.bump();
        self.inner.insert(collection, doc).await
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> StoreResult<usize> {
        self.bump();
        self.inner.insert_many(collection, docs).await
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        patch: Document,
    ) -> StoreResult<bool> {
        self.bump();
        self.inner.update_by_id(collection, id, patch).await
    }

    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<bool> {
        self.bump();
        self.inner.delete_by_id(collection, id).await
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.bump();
        self.inner.count(collection).await
    }
}

/// Store double where every operation fails, for exercising the 500 paths
/// and the delete catch-all.
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Backend("injected failure".to_string())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_all(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Err(Self::error())
    }

    async fn find_by_id(&self, _collection: &str, _id: &ObjectId) -> StoreResult<Option<Document>> {
        Err(Self::error())
    }

    async fn insert(&self, _collection: &str, _doc: Document) -> StoreResult<ObjectId> {
        Err(Self::error())
    }

    async fn insert_many(&self, _collection: &str, _docs: Vec<Document>) -> StoreResult<usize> {
        Err(Self::error())
    }

    async fn update_by_id(
        &self,
        _collection: &str,
        _id: &ObjectId,
        _patch: Document,
    ) -> StoreResult<bool> {
        Err(Self::error())
    }

    async fn delete_by_id(&self, _collection: &str, _id: &ObjectId) -> StoreResult<bool> {
        Err(Self::error())
    }

    async fn count(&self, _collection: &str) -> StoreResult<u64> {
        Err(Self::error())
    }
}
