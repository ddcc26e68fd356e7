use crate::traits::{SlotStore, StorageError, StorageResult, StoredVideo};
use crate::SLOT_STEM;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem single-slot store
#[derive(Clone)]
pub struct LocalSlotStore {
    base_path: PathBuf,
}

impl LocalSlotStore {
    /// Create a new LocalSlotStore instance
    ///
    /// # Arguments
    /// * `base_path` - Directory holding the slot file (e.g. "videos"),
    ///   created recursively if absent
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalSlotStore { base_path })
    }

    /// Validate an extension and build the slot path for it.
    ///
    /// Extensions must be non-empty ASCII alphanumerics; path traversal
    /// through the extension is impossible by construction.
    fn slot_path(&self, extension: &str) -> StorageResult<PathBuf> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StorageError::InvalidExtension(extension.to_string()));
        }
        Ok(self.base_path.join(format!("{}.{}", SLOT_STEM, extension)))
    }

    /// Find the current slot file, scanning for `{stem}.` entries.
    async fn find_slot(&self) -> StorageResult<Option<PathBuf>> {
        let prefix = format!("{}.", SLOT_STEM);
        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::ReadFailed(format!(
                "Failed to list storage directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(&prefix) {
                return Ok(Some(entry.path()));
            }
        }
        Ok(None)
    }

    /// Remove slot files other than `keep`, so a new upload with a different
    /// extension does not leave a stale sibling behind. Best-effort: by the
    /// time this runs the new slot is already durably written, so cleanup
    /// failures are logged, never surfaced.
    async fn remove_stale_slots(&self, keep: &Path) {
        let prefix = format!("{}.", SLOT_STEM);
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.base_path.display(),
                    error = %e,
                    "Failed to list storage directory for stale slot cleanup"
                );
                return;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(
                        path = %self.base_path.display(),
                        error = %e,
                        "Failed to read storage directory entry during stale slot cleanup"
                    );
                    break;
                }
            };

            let path = entry.path();
            if path == keep {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with(&prefix) {
                if let Err(e) = fs::remove_file(&path).await {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to remove stale slot file"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl SlotStore for LocalSlotStore {
    async fn store(&self, extension: &str, data: Vec<u8>) -> StorageResult<String> {
        let path = self.slot_path(extension)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        self.remove_stale_slots(&path).await;

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Slot store write successful"
        );

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", SLOT_STEM, extension));
        Ok(filename)
    }

    async fn load(&self) -> StorageResult<StoredVideo> {
        let path = self.find_slot().await?.ok_or(StorageError::NotFound)?;
        let start = std::time::Instant::now();

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Slot store read successful"
        );

        Ok(StoredVideo { extension, data })
    }

    async fn current(&self) -> StorageResult<Option<String>> {
        Ok(self
            .find_slot()
            .await?
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned())))
    }

    async fn clear(&self) -> StorageResult<()> {
        if let Some(path) = self.find_slot().await? {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}
