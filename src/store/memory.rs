//! In-process store backend.

use super::{Document, DocumentStore, StoreResult};
use crate::oid::ObjectId;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

/// In-memory document store backed by concurrent hash maps, one per
/// collection. Collections come into existence on first write; reading an
/// unknown collection behaves like an empty one.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, DashMap<ObjectId, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_collection<T>(&self, name: &str, f: impl FnOnce(&DashMap<ObjectId, Document>) -> T) -> T {
        let collection = self
            .collections
            .entry(name.to_string())
            .or_default();
        f(collection.value())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let docs = match self.collections.get(collection) {
            Some(records) => records.iter().map(|entry| entry.value().clone()).collect(),
            None => Vec::new(),
        };
        Ok(docs)
    }

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<Option<Document>> {
        let doc = self
            .collections
            .get(collection)
            .and_then(|records| records.get(id).map(|entry| entry.value().clone()));
        Ok(doc)
    }

    async fn insert(&self, collection: &str, mut doc: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        doc.insert("_id".to_string(), Value::String(id.to_string()));
        self.with_collection(collection, |records| records.insert(id, doc));
        Ok(id)
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> StoreResult<usize> {
        let written = docs.len();
        self.with_collection(collection, |records| {
            for mut doc in docs {
                let id = ObjectId::new();
                doc.insert("_id".to_string(), Value::String(id.to_string()));
                records.insert(id, doc);
            }
        });
        Ok(written)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        patch: Document,
    ) -> StoreResult<bool> {
        let matched = self.with_collection(collection, |records| {
            match records.get_mut(id) {
                Some(mut entry) => {
                    let doc = entry.value_mut();
                    for (key, value) in patch {
                        // The identifier is immutable once assigned.
                        if key != "_id" {
                            doc.insert(key, value);
                        }
                    }
                    true
                }
                None => false,
            }
        });
        Ok(matched)
    }

    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> StoreResult<bool> {
        let matched = self
            .collections
            .get(collection)
            .is_some_and(|records| records.remove(id).is_some());
        Ok(matched)
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let count = self
            .collections
            .get(collection)
            .map_or(0, |records| records.len() as u64);
        Ok(count)
    }
}
