//! Document-store abstraction.
//!
//! The service talks to its persistence layer exclusively through the
//! [`DocumentStore`] trait: find-all, find-by-id, insert, merge-update and
//! delete-by-id over named collections of schemaless JSON documents. The
//! in-process [`MemoryStore`] is the default backend; a networked document
//! store plugs in behind the same trait.

mod memory;

pub use memory::MemoryStore;

use crate::oid::ObjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A stored record: a JSON object keyed by `_id` once inserted.
pub type Document = serde_json::Map<String, serde_json::Value>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// CRUD-by-identifier operations over named collections.
///
/// Implementations assign each inserted document a fresh [`ObjectId`] under
/// the `_id` key; the identifier is immutable for the life of the record.
/// Update is a merge: only the supplied fields are overwritten.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Option<Document>>;

    /// Insert `doc` and return the identifier assigned to it.
    async fn insert(&self, collection: &str, doc: Document) -> StoreResult<ObjectId>;

    /// Insert a batch of documents, returning how many were written.
    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> StoreResult<usize>;

    /// Merge `patch` into the record matching `id`. Returns whether a record
    /// matched. Fields absent from `patch` retain their prior values.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        patch: Document,
    ) -> StoreResult<bool>;

    /// Remove the record matching `id`. Returns whether a record matched.
    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<bool>;

    async fn count(&self, collection: &str) -> StoreResult<u64>;
}

/// Handle binding a store to one collection, constructed once at startup and
/// handed to the controller for each resource type.
#[derive(Clone)]
pub struct Collection {
    store: Arc<dyn DocumentStore>,
    name: &'static str,
}

impl Collection {
    pub fn new(store: Arc<dyn DocumentStore>, name: &'static str) -> Self {
        Self { store, name }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(self.name).await
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Document>> {
        self.store.find_by_id(self.name, id).await
    }

    pub async fn insert(&self, doc: Document) -> StoreResult<ObjectId> {
        self.store.insert(self.name, doc).await
    }

    pub async fn insert_many(&self, docs: Vec<Document>) -> StoreResult<usize> {
        self.store.insert_many(self.name, docs).await
    }

    pub async fn update_by_id(&self, id: &ObjectId, patch: Document) -> StoreResult<bool> {
        self.store.update_by_id(self.name, id, patch).await
    }

    pub async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<bool> {
        self.store.delete_by_id(self.name, id).await
    }

    pub async fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.store.count(self.name).await? == 0)
    }
}
