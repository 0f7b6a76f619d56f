//! Atomic file writes for the data-root files.

use std::io;
use std::path::Path;

use tokio::fs as tokio_fs;

use crate::error::{IssueRowError, Result};

fn storage_error(operation: &str, path: &Path, e: io::Error) -> IssueRowError {
    IssueRowError::Io(io::Error::new(
        e.kind(),
        format!("Failed to {operation} {}: {e}", path.display()),
    ))
}

/// Write file atomically using temp file and rename.
///
/// Either the new content is fully written or the original file is left
/// untouched.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(|e| storage_error("write", &temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| storage_error("rename", path, e))
}

/// Async version of [`write_file_atomic`].
pub async fn write_file_async_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir_async(path).await?;

    let temp_path = path.with_extension("tmp");
    tokio_fs::write(&temp_path, content)
        .await
        .map_err(|e| storage_error("write", &temp_path, e))?;
    tokio_fs::rename(&temp_path, path)
        .await
        .map_err(|e| storage_error("rename", path, e))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, e))?;
    }
    Ok(())
}

pub async fn ensure_parent_dir_async(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        tokio_fs::create_dir_all(parent)
            .await
            .map_err(|e| storage_error("create", parent, e))?;
    }
    Ok(())
}
