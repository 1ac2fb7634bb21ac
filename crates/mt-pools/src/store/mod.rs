//! Persistence of server documents.
//!
//! A store is a plain key-value map from server id to the document's JSON
//! text. It offers no transactions: callers load, change and save the whole
//! document, and the last save wins.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;

/// Key-value persistence for server documents.
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Fetch the stored document text, or `None` if nothing was saved yet.
    async fn get(&self, server_id: &str) -> Result<Option<String>, StoreError>;

    /// Replace the stored document text.
    async fn set(&self, server_id: &str, document: String) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: PoolStore + ?Sized> PoolStore for Arc<S> {
    async fn get(&self, server_id: &str) -> Result<Option<String>, StoreError> {
        (**self).get(server_id).await
    }

    async fn set(&self, server_id: &str, document: String) -> Result<(), StoreError> {
        (**self).set(server_id, document).await
    }
}
