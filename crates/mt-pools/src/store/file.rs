//! Directory-backed store: one `<server id>.json` file per server.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use super::PoolStore;
use crate::error::StoreError;

/// Distinguishes temp files of concurrent writers.
static NEXT_TEMP: AtomicU64 = AtomicU64::new(0);

/// A store that keeps each server's document in its own file.
///
/// Writes go to a temp file that is then renamed over the target, so a
/// reader sees either the old or the new document, never a partial one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for documents. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, server_id: &str) -> Result<PathBuf, StoreError> {
        let valid = !server_id.is_empty()
            && server_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(server_id.to_string()));
        }
        Ok(self.dir.join(format!("{server_id}.json")))
    }
}

#[async_trait]
impl PoolStore for FileStore {
    async fn get(&self, server_id: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(server_id)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, server_id: &str, document: String) -> Result<(), StoreError> {
        let path = self.path_for(server_id)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let temp = self.dir.join(format!(
            ".{server_id}.{}.{}.tmp",
            std::process::id(),
            NEXT_TEMP.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&temp, document).await?;
        if let Err(e) = tokio::fs::rename(&temp, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                tracing::warn!(temp = %temp.display(), error = %cleanup, "left temp file behind");
            }
            return Err(e.into());
        }
        Ok(())
    }
}
