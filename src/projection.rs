//! Display facets derived from an issue.
//!
//! Everything here is pure and total: missing or unknown data maps to a
//! documented fallback rather than an error.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::issue::{Issue, IssueState, StateReason};

/// Login shown for issues whose author account no longer exists.
pub const GHOST_LOGIN: &str = "ghost";

/// Pattern for the long-form "updated" tooltip, e.g. `Monday 3 June 2024 at 14:05`.
pub const UPDATED_AT_FORMAT: &str = "%A %-d %B %Y at %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "kebab-case")]
pub enum Icon {
    Avatar(String),
    Person,
    Ghost,
    IssueOpened,
    IssueClosed,
    IssueNotPlanned,
    QuestionMark,
    Bubble,
    ComputerChip,
}

impl Icon {
    /// Terminal stand-in for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Avatar(_) | Icon::Person => "@",
            Icon::Ghost => "?",
            Icon::IssueOpened => "○",
            Icon::IssueClosed => "●",
            Icon::IssueNotPlanned => "⊘",
            Icon::QuestionMark => "?",
            Icon::Bubble => "💬",
            Icon::ComputerChip => "▣",
        }
    }
}

/// An icon paired with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub icon: Icon,
    pub text: String,
}

impl Badge {
    pub fn new(icon: Icon, text: impl Into<String>) -> Self {
        Self {
            icon,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedAt {
    /// Raw instant, left to the host for relative rendering
    pub date: Timestamp,
    pub tooltip: String,
}

pub fn project_author(issue: &Issue) -> Badge {
    match &issue.author {
        Some(author) => {
            let icon = match &author.avatar_url {
                Some(url) if !url.is_empty() => Icon::Avatar(url.clone()),
                _ => Icon::Person,
            };
            Badge::new(icon, author.login.as_str())
        }
        None => Badge::new(Icon::Ghost, GHOST_LOGIN),
    }
}

pub fn project_status(issue: &Issue) -> Badge {
    match (&issue.state, &issue.state_reason) {
        (IssueState::Open, _) => Badge::new(Icon::IssueOpened, "Open"),
        (IssueState::Closed, Some(StateReason::NotPlanned)) => {
            Badge::new(Icon::IssueNotPlanned, "Closed as not planned")
        }
        (IssueState::Closed, _) => Badge::new(Icon::IssueClosed, "Closed"),
        (IssueState::Other(_), _) => Badge::new(Icon::QuestionMark, "Unknown"),
    }
}

/// Format the update time in the system time zone.
pub fn format_updated_at(issue: &Issue) -> UpdatedAt {
    format_updated_at_in(issue, &TimeZone::system())
}

pub fn format_updated_at_in(issue: &Issue, tz: &TimeZone) -> UpdatedAt {
    let long_form = issue
        .updated_at
        .to_zoned(tz.clone())
        .strftime(UPDATED_AT_FORMAT)
        .to_string();
    UpdatedAt {
        date: issue.updated_at,
        tooltip: format!("Updated: {long_form}"),
    }
}
