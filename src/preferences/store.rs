use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::PreferenceRecord;
use crate::context::ContextKey;
use crate::error::{IssueRowError, Result};
use crate::fs::write_file_async_atomic;

/// Backing storage for preference records.
///
/// `load` returns `Ok(None)` when nothing was ever stored for a key; that is
/// a normal outcome, not an error.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn load(&self, key: &ContextKey) -> Result<Option<PreferenceRecord>>;

    async fn save(&self, key: &ContextKey, record: &PreferenceRecord) -> Result<()>;
}

/// In-process store, used by tests and by hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: Mutex<HashMap<ContextKey, PreferenceRecord>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn load(&self, key: &ContextKey) -> Result<Option<PreferenceRecord>> {
        Ok(self.records.lock().get(key).cloned())
    }

    async fn save(&self, key: &ContextKey, record: &PreferenceRecord) -> Result<()> {
        self.records.lock().insert(key.clone(), record.clone());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    #[serde(flatten)]
    key: ContextKey,
    #[serde(flatten)]
    record: PreferenceRecord,
}

/// JSON file holding every stored record as a flat list.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<StoredPreference>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(IssueRowError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read preferences at {}: {}",
                    self.path.display(),
                    e
                ),
            ))),
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load(&self, key: &ContextKey) -> Result<Option<PreferenceRecord>> {
        let entries = self.read_all().await?;
        Ok(entries
            .into_iter()
            .find(|entry| &entry.key == key)
            .map(|entry| entry.record))
    }

    async fn save(&self, key: &ContextKey, record: &PreferenceRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        match entries.iter_mut().find(|entry| &entry.key == key) {
            Some(entry) => entry.record = record.clone(),
            None => entries.push(StoredPreference {
                key: key.clone(),
                record: record.clone(),
            }),
        }

        let content = serde_json::to_string_pretty(&entries)?;
        write_file_async_atomic(&self.path, &content).await?;

        tracing::debug!(%key, "saved preference record");
        Ok(())
    }
}
