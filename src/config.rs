//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the data root and includes:
//! - The Gitpod installation workspaces are opened on
//! - How many recents the command-line host keeps
//! - The editor defaults handed out for contexts with no stored preferences

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{IssueRowError, Result};
use crate::fs;
use crate::paths;
use crate::preferences::{DEFAULT_EDITOR, EditorClass, PreferenceRecord};
use crate::workspace::DEFAULT_GITPOD_URL;

pub const VALID_KEYS: &[&str] = &[
    "gitpod_url",
    "recents_limit",
    "default_editor",
    "default_editor_class",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Gitpod installation
    #[serde(default = "default_gitpod_url")]
    pub gitpod_url: String,

    /// Maximum number of recents kept after an add (default: 20)
    #[serde(default = "default_recents_limit")]
    pub recents_limit: usize,

    #[serde(default = "default_editor")]
    pub default_editor: String,

    #[serde(default)]
    pub default_editor_class: EditorClass,
}

fn default_gitpod_url() -> String {
    DEFAULT_GITPOD_URL.to_string()
}

fn default_recents_limit() -> usize {
    20
}

fn default_editor() -> String {
    DEFAULT_EDITOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gitpod_url: default_gitpod_url(),
            recents_limit: default_recents_limit(),
            default_editor: default_editor(),
            default_editor_class: EditorClass::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            IssueRowError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        fs::write_file_atomic(&Self::config_path(), &content)
    }

    /// Record handed out for contexts with nothing stored
    pub fn preference_defaults(&self) -> PreferenceRecord {
        PreferenceRecord::new(
            self.default_editor.clone(),
            self.default_editor_class.clone(),
        )
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "gitpod_url" => Ok(self.gitpod_url.clone()),
            "recents_limit" => Ok(self.recents_limit.to_string()),
            "default_editor" => Ok(self.default_editor.clone()),
            "default_editor_class" => Ok(self.default_editor_class.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "gitpod_url" => {
                url::Url::parse(value).map_err(|e| {
                    IssueRowError::Config(format!("invalid gitpod_url '{value}': {e}"))
                })?;
                self.gitpod_url = value.to_string();
            }
            "recents_limit" => {
                self.recents_limit = value.parse().map_err(|_| {
                    IssueRowError::Config(format!(
                        "recents_limit must be a non-negative integer, got '{value}'"
                    ))
                })?;
            }
            "default_editor" => {
                if value.trim().is_empty() {
                    return Err(IssueRowError::Config(
                        "default_editor cannot be empty".to_string(),
                    ));
                }
                self.default_editor = value.to_string();
            }
            "default_editor_class" => self.default_editor_class = EditorClass::from(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> IssueRowError {
    IssueRowError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
