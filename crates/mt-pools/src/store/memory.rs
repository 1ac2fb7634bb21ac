//! In-process store, shared between clones.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PoolStore;
use crate::error::StoreError;

/// A store backed by a shared in-memory map.
///
/// Cloning yields another handle onto the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl PoolStore for MemoryStore {
    async fn get(&self, server_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.read().await.get(server_id).cloned())
    }

    async fn set(&self, server_id: &str, document: String) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .insert(server_id.to_string(), document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("g1").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = MemoryStore::new();
        store.set("g1", "{}".to_string()).await.unwrap();
        store.set("g1", r#"{"game":"sta"}"#.to_string()).await.unwrap();
        assert_eq!(
            store.get("g1").await.unwrap().as_deref(),
            Some(r#"{"game":"sta"}"#)
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("g1", "{}".to_string()).await.unwrap();
        assert!(other.get("g1").await.unwrap().is_some());
    }
}
