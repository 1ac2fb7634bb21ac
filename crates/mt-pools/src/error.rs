//! Error types for the pool layer.

use thiserror::Error;

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors raised by a [`PoolStore`](crate::store::PoolStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused or could not reach its storage.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The server identifier cannot be used as a storage key.
    #[error("invalid server id for storage: {0:?}")]
    InvalidKey(String),
}

/// Errors that can occur while handling a pool or dice request.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Reading or writing the server document failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The persisted document is not a valid pool document.
    #[error("corrupt pool document for server {server}: {source}")]
    CorruptDocument {
        /// The server whose document failed to parse.
        server: String,
        /// What went wrong.
        source: serde_json::Error,
    },

    /// A document could not be serialised for saving.
    #[error("failed to encode pool document for server {server}: {source}")]
    EncodeDocument {
        /// The server whose document was being saved.
        server: String,
        /// What went wrong.
        source: serde_json::Error,
    },

    /// A dice or catalog operation failed.
    #[error("{0}")]
    Mechanics(#[from] mt_mechanics::MechError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<i64>("x").unwrap_err()
    }

    #[test]
    fn load_and_save_failures_read_differently() {
        let load = PoolError::CorruptDocument {
            server: "g1".to_string(),
            source: json_error(),
        };
        let save = PoolError::EncodeDocument {
            server: "g1".to_string(),
            source: json_error(),
        };
        assert!(load.to_string().starts_with("corrupt pool document for server g1"));
        assert!(save.to_string().starts_with("failed to encode pool document for server g1"));
    }
}
