//! Context keys address preference records.
//!
//! A key is the triple `(entity type, repository, context)`. For issues the
//! context is the issue title, so two issues in the same repository with the
//! same title share preferences, and renaming an issue orphans its record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IssueRowError;
use crate::issue::Issue;

/// Kind of entity a workspace is opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Issue,
    #[serde(rename = "Pull Request")]
    PullRequest,
    Repository,
    Branch,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Issue => "Issue",
            EntityType::PullRequest => "Pull Request",
            EntityType::Repository => "Repository",
            EntityType::Branch => "Branch",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = IssueRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "issue" => Ok(EntityType::Issue),
            "pullrequest" | "pr" => Ok(EntityType::PullRequest),
            "repository" | "repo" => Ok(EntityType::Repository),
            "branch" => Ok(EntityType::Branch),
            _ => Err(IssueRowError::Other(format!("invalid entity type: {s}"))),
        }
    }
}

/// Canonical address of a preference record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContextKey {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub repository: String,
    pub context: String,
}

impl ContextKey {
    pub fn new(
        entity_type: EntityType,
        repository: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            repository: repository.into(),
            context: context.into(),
        }
    }

    /// Key for an issue: keyed by title, not by issue id or number.
    pub fn for_issue(issue: &Issue) -> Self {
        Self::new(
            EntityType::Issue,
            issue.repository_name(),
            issue.title.as_str(),
        )
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.entity_type, self.repository, self.context
        )
    }
}
