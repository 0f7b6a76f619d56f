use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::IssueRowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowAction {
    OpenInWorkspace,
    ViewInBrowser,
    ShowPreview,
    HidePreview,
    AddToRecents,
    RemoveFromRecents,
    ConfigureWorkspace,
}

impl RowAction {
    /// Every action, in action-panel order.
    pub const ALL: [RowAction; 7] = [
        RowAction::OpenInWorkspace,
        RowAction::ViewInBrowser,
        RowAction::ShowPreview,
        RowAction::HidePreview,
        RowAction::AddToRecents,
        RowAction::RemoveFromRecents,
        RowAction::ConfigureWorkspace,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            RowAction::OpenInWorkspace => "Open Issue in Gitpod",
            RowAction::ViewInBrowser => "View Issue in GitHub",
            RowAction::ShowPreview => "Show Issue Preview",
            RowAction::HidePreview => "Hide Issue Preview",
            RowAction::AddToRecents => "Add Issue to Recents",
            RowAction::RemoveFromRecents => "Remove from Recents",
            RowAction::ConfigureWorkspace => "Configure Workspace",
        }
    }

    /// Short name used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            RowAction::OpenInWorkspace => "open",
            RowAction::ViewInBrowser => "view",
            RowAction::ShowPreview => "show-preview",
            RowAction::HidePreview => "hide-preview",
            RowAction::AddToRecents => "add-recent",
            RowAction::RemoveFromRecents => "remove-recent",
            RowAction::ConfigureWorkspace => "configure",
        }
    }

    pub fn shortcut(&self) -> Option<Shortcut> {
        let key = match self {
            RowAction::OpenInWorkspace => "g",
            RowAction::ViewInBrowser => return None,
            RowAction::ShowPreview => "arrowRight",
            RowAction::HidePreview => "arrowLeft",
            RowAction::AddToRecents => "r",
            RowAction::RemoveFromRecents => "d",
            RowAction::ConfigureWorkspace => "w",
        };
        Some(Shortcut { modifier: "cmd", key })
    }

    /// Whether the action is offered on a row rendered live or from recents.
    pub fn is_available(&self, from_cache: bool) -> bool {
        match self {
            RowAction::OpenInWorkspace
            | RowAction::ViewInBrowser
            | RowAction::ConfigureWorkspace => true,
            RowAction::ShowPreview | RowAction::HidePreview | RowAction::AddToRecents => {
                !from_cache
            }
            RowAction::RemoveFromRecents => from_cache,
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for RowAction {
    type Err = IssueRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RowAction::ALL
            .into_iter()
            .find(|action| action.slug() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = RowAction::ALL.iter().map(|a| a.slug()).collect();
                IssueRowError::Other(format!(
                    "invalid action '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Actions offered on a row, in panel order.
pub fn available_actions(from_cache: bool) -> Vec<RowAction> {
    RowAction::ALL
        .into_iter()
        .filter(|action| action.is_available(from_cache))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub modifier: &'static str,
    pub key: &'static str,
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            "arrowRight" => "→",
            "arrowLeft" => "←",
            other => other,
        };
        write!(f, "{}+{}", self.modifier, key)
    }
}

/// Whether a row's issue body is shown in the detail pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewState {
    #[default]
    Hidden,
    Visible,
}

impl PreviewState {
    pub fn is_visible(&self) -> bool {
        matches!(self, PreviewState::Visible)
    }

    /// Next state for `action`, or `None` if the action is not a legal
    /// preview transition on this row.
    pub fn transition(self, action: RowAction, from_cache: bool) -> Option<PreviewState> {
        if !action.is_available(from_cache) {
            return None;
        }
        match action {
            RowAction::ShowPreview => Some(PreviewState::Visible),
            RowAction::HidePreview => Some(PreviewState::Hidden),
            _ => None,
        }
    }
}
