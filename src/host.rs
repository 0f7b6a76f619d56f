//! Capabilities a row calls into but does not own.
//!
//! The launcher host (list UI, CLI, tests) implements [`RowHost`]. Failures
//! from these effects are the host's concern; the presenter passes them
//! through untouched.

use async_trait::async_trait;
use serde::Serialize;

use crate::context::{ContextKey, EntityType};
use crate::error::Result;
use crate::issue::Issue;
use crate::preferences::PreferenceRecord;
use crate::toast::Toast;

/// Everything the workspace launcher needs to open an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    pub url: String,
    pub entity_type: EntityType,
    pub repository: String,
    pub context: String,
    pub preferences: PreferenceRecord,
}

impl WorkspaceRequest {
    pub fn new(url: impl Into<String>, key: &ContextKey, preferences: PreferenceRecord) -> Self {
        Self {
            url: url.into(),
            entity_type: key.entity_type,
            repository: key.repository.clone(),
            context: key.context.clone(),
            preferences,
        }
    }
}

/// Input for the preferences sub-view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureRequest {
    pub key: ContextKey,
    /// Record the row is currently showing
    pub current: PreferenceRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// The sub-view wrote a new record; the row must revalidate.
    Saved,
    Cancelled,
}

#[async_trait]
pub trait RowHost: Send + Sync {
    /// Record a visit; the host uses this to populate its recents cache.
    async fn visit_issue(&self, issue: &Issue) -> Result<()>;

    /// Drop an issue from the host's recents cache.
    async fn remove_issue(&self, issue: &Issue) -> Result<()>;

    async fn launch_workspace(&self, request: &WorkspaceRequest) -> Result<()>;

    async fn open_url(&self, url: &str) -> Result<()>;

    async fn notify(&self, toast: Toast) -> Result<()>;

    async fn configure(&self, request: &ConfigureRequest) -> Result<ConfigureOutcome>;
}
