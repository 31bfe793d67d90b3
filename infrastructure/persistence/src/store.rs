//! Flat-file JSON store holding the whole inventory document.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::product::entity::InventoryDocument;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.io_error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store.serialization_error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration for the JSON store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Reads and writes the inventory document as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, or `None` when the file does not exist yet.
    pub async fn load(&self) -> Result<Option<InventoryDocument>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: InventoryDocument = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            count = document.products.len(),
            "Loaded inventory document"
        );
        Ok(Some(document))
    }

    /// Moves an unreadable document to `<name>.json.corrupt` so the next
    /// save cannot overwrite it. Returns the new location.
    pub async fn quarantine(&self) -> Result<PathBuf, StoreError> {
        let target = self.path.with_extension("json.corrupt");
        fs::rename(&self.path, &target).await?;
        Ok(target)
    }

    /// Replaces the whole document on disk.
    ///
    /// Writes to a sibling temp file then renames it over the target, so a
    /// reader never observes a half-written document.
    pub async fn save(&self, document: &InventoryDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &bytes).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!(
            path = %self.path.display(),
            count = document.products.len(),
            size = bytes.len(),
            "Stored inventory document"
        );
        Ok(())
    }
}
