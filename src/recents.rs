//! Recently visited issues.
//!
//! The cache is an ordered set keyed on issue id: an index vector holds the
//! ids most-recent-first and a map holds the issue for each member. Adding an
//! existing member moves it to the front instead of duplicating it. The cache
//! is independent of any live search; eviction is left to the host
//! (see [`RecentsCache::truncate`]).

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{IssueRowError, Result};
use crate::fs;
use crate::issue::Issue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Issue>", into = "Vec<Issue>")]
pub struct RecentsCache {
    order: Vec<String>,
    issues: HashMap<String, Issue>,
}

impl RecentsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `issue` or promote it to the most-recent position.
    ///
    /// The stored record is replaced with `issue`, so re-adding refreshes it.
    pub fn add(&mut self, issue: Issue) {
        if self.issues.contains_key(&issue.id) {
            self.order.retain(|id| id != &issue.id);
        }
        self.order.insert(0, issue.id.clone());
        tracing::debug!(id = %issue.id, number = issue.number, "added issue to recents");
        self.issues.insert(issue.id.clone(), issue);
    }

    /// Remove by id. Returns the removed issue, `None` if it was not a member.
    pub fn remove(&mut self, id: &str) -> Option<Issue> {
        let removed = self.issues.remove(id)?;
        self.order.retain(|member| member != id);
        tracing::debug!(%id, "removed issue from recents");
        Some(removed)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.issues.contains_key(id)
    }

    /// Members, most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.order.iter().filter_map(|id| self.issues.get(id))
    }

    pub fn list(&self) -> Vec<Issue> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.issues.clear();
    }

    /// Keep the `limit` most recent members and return the evicted ones.
    pub fn truncate(&mut self, limit: usize) -> Vec<Issue> {
        if self.order.len() <= limit {
            return Vec::new();
        }
        self.order
            .split_off(limit)
            .into_iter()
            .filter_map(|id| self.issues.remove(&id))
            .collect()
    }

    /// Load from a JSON file; a missing file is an empty cache.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Ok(Self::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(IssueRowError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read recents at {}: {}", path.display(), e),
            ))),
        }
    }

    /// Persist as JSON, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write_file_atomic(path, &content)
    }
}

impl From<Vec<Issue>> for RecentsCache {
    /// Builds from a most-recent-first list; later duplicates are dropped.
    fn from(issues: Vec<Issue>) -> Self {
        let mut cache = RecentsCache::new();
        for issue in issues {
            if cache.issues.contains_key(&issue.id) {
                continue;
            }
            cache.order.push(issue.id.clone());
            cache.issues.insert(issue.id.clone(), issue);
        }
        cache
    }
}

impl From<RecentsCache> for Vec<Issue> {
    fn from(mut cache: RecentsCache) -> Self {
        cache
            .order
            .iter()
            .filter_map(|id| cache.issues.remove(id))
            .collect()
    }
}

/// Handle shared by every row of a recents view.
#[derive(Debug, Clone, Default)]
pub struct SharedRecents {
    inner: Arc<RwLock<RecentsCache>>,
}

impl SharedRecents {
    pub fn new(cache: RecentsCache) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn add(&self, issue: Issue) {
        self.inner.write().add(issue);
    }

    pub fn remove(&self, id: &str) -> Option<Issue> {
        self.inner.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn list(&self) -> Vec<Issue> {
        self.inner.read().list()
    }

    pub fn truncate(&self, limit: usize) -> Vec<Issue> {
        self.inner.write().truncate(limit)
    }

    /// Snapshot the cache and persist it without holding the lock across
    /// the write.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&*self.inner.read())?;
        fs::write_file_async_atomic(path, &content).await
    }
}
