//! Storage abstraction trait
//!
//! This module defines the SlotStore trait that slot storage backends must
//! implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("No stored video")]
    NotFound,

    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The current slot contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVideo {
    /// Extension of the slot file, without the dot (e.g. `mp4`)
    pub extension: String,
    pub data: Vec<u8>,
}

impl StoredVideo {
    /// Media type derived from the slot file's extension.
    pub fn content_type(&self) -> String {
        format!("video/{}", self.extension)
    }
}

/// Single-slot video store.
///
/// The store holds at most one video. Storing replaces whatever was there
/// before, including a slot file with a different extension. Last write wins
/// under concurrent stores; there is no cross-request locking.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Replace the slot with the given bytes and return the slot filename.
    async fn store(&self, extension: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read the whole slot into memory.
    async fn load(&self) -> StorageResult<StoredVideo>;

    /// Filename of the current slot file, if any.
    async fn current(&self) -> StorageResult<Option<String>>;

    /// Remove the stored video, if any.
    async fn clear(&self) -> StorageResult<()>;
}
