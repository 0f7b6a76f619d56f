//! Command implementations for the command-line host.

mod act;
mod config;
mod host;
mod prefs;
mod recents;
mod row;

pub use act::{ActOptions, cmd_act};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use host::CliHost;
pub use prefs::{cmd_prefs_set, cmd_prefs_show};
pub use recents::{cmd_recents_add, cmd_recents_clear, cmd_recents_list, cmd_recents_remove};
pub use row::cmd_row;

use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{IssueRowError, Result};
use crate::issue::{Issue, parse_issues};
use crate::paths;
use crate::preferences::{FilePreferenceStore, PreferenceAccessor, PreferenceStore};
use crate::recents::RecentsCache;

/// JSON payload plus an optional human-readable rendering.
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, as_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !as_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Read issues from a JSON file, or from stdin when `path` is `-`.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            IssueRowError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read issues at {}: {}", path.display(), e),
            ))
        })?
    };
    let issues = parse_issues(&content)?;
    if issues.is_empty() {
        return Err(IssueRowError::Other(format!(
            "no issues found in {}",
            path.display()
        )));
    }
    Ok(issues)
}

pub(crate) fn preference_store() -> Arc<dyn PreferenceStore> {
    Arc::new(FilePreferenceStore::new(paths::preferences_path()))
}

pub(crate) fn preference_accessor(
    config: &Config,
    store: Arc<dyn PreferenceStore>,
) -> PreferenceAccessor {
    PreferenceAccessor::with_defaults(store, config.preference_defaults())
}

pub(crate) fn load_recents() -> Result<RecentsCache> {
    RecentsCache::load(&paths::recents_path())
}
