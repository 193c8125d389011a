//! JSON persistence helpers.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::StoreError;

/// Creates `dir` and its parents if they do not exist.
pub async fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Reads and deserializes a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = tokio::fs::read_to_string(path).await?;
    let value = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "Loaded JSON");
    Ok(value)
}

/// Serializes `value` to `path`.
///
/// Writes to a sibling `*.tmp` file first and renames it over the target, so
/// readers never observe a half-written file.
pub async fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension(match path.extension() {
        Some(ext) => format!("{}.tmp", ext.to_string_lossy()),
        None => "tmp".to_string(),
    });

    tokio::fs::write(&tmp_path, json).await?;
    tokio::fs::rename(&tmp_path, path).await?;

    debug!(path = %path.display(), "Saved JSON");
    Ok(())
}
