//! Issue records as supplied by the issue source.
//!
//! Field names follow the GitHub GraphQL issue fragment (`nameWithOwner`,
//! `totalCount`, `updatedAt`, ...) so that query results deserialize directly.
//! The core treats these records as read-only.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An issue as returned by the upstream search/listing source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Opaque node ID
    pub id: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub state: IssueState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    /// Absent for deleted ("ghost") accounts
    #[serde(default)]
    pub author: Option<Author>,
    pub repository: Repository,
    #[serde(default)]
    pub comments: Comments,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name_with_owner: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comments {
    pub total_count: u32,
}

/// Lifecycle state reported by the source.
///
/// States this crate does not know about are preserved verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    Other(String),
}

impl From<String> for IssueState {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "OPEN" => IssueState::Open,
            "CLOSED" => IssueState::Closed,
            _ => IssueState::Other(value),
        }
    }
}

impl From<IssueState> for String {
    fn from(state: IssueState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => write!(f, "OPEN"),
            IssueState::Closed => write!(f, "CLOSED"),
            IssueState::Other(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateReason {
    Completed,
    NotPlanned,
    Reopened,
    Other(String),
}

impl From<String> for StateReason {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "COMPLETED" => StateReason::Completed,
            "NOT_PLANNED" => StateReason::NotPlanned,
            "REOPENED" => StateReason::Reopened,
            _ => StateReason::Other(value),
        }
    }
}

impl From<StateReason> for String {
    fn from(reason: StateReason) -> Self {
        match reason {
            StateReason::Completed => "COMPLETED".to_string(),
            StateReason::NotPlanned => "NOT_PLANNED".to_string(),
            StateReason::Reopened => "REOPENED".to_string(),
            StateReason::Other(s) => s,
        }
    }
}

impl Issue {
    pub fn repository_name(&self) -> &str {
        &self.repository.name_with_owner
    }

    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.login.as_str())
    }

    pub fn comment_count(&self) -> u32 {
        self.comments.total_count
    }
}

/// Parse one issue or an array of issues from JSON.
pub fn parse_issues(json: &str) -> Result<Vec<Issue>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
