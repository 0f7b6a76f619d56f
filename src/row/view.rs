//! Render-ready row data handed back to the host.

use serde::Serialize;

use super::action::{RowAction, Shortcut};
use crate::projection::{Icon, UpdatedAt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Accessory {
    Comments {
        count: u32,
        icon: Icon,
    },
    Updated(UpdatedAt),
    EditorClass {
        text: &'static str,
        icon: Icon,
        tooltip: String,
    },
    Author {
        /// Author label, or the fallback login for deleted accounts
        login: String,
        icon: Icon,
        tooltip: String,
    },
}

impl Accessory {
    pub fn text(&self) -> Option<String> {
        match self {
            Accessory::Comments { count, .. } => Some(count.to_string()),
            Accessory::EditorClass { text, .. } => Some((*text).to_string()),
            Accessory::Updated(_) | Accessory::Author { .. } => None,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Accessory::Comments { .. } => None,
            Accessory::Updated(updated) => Some(&updated.tooltip),
            Accessory::EditorClass { tooltip, .. } | Accessory::Author { tooltip, .. } => {
                Some(tooltip)
            }
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        match self {
            Accessory::Comments { icon, .. }
            | Accessory::EditorClass { icon, .. }
            | Accessory::Author { icon, .. } => Some(icon),
            Accessory::Updated(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtitle {
    pub value: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIcon {
    pub icon: Icon,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    pub action: RowAction,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<Shortcut>,
}

impl From<RowAction> for ActionEntry {
    fn from(action: RowAction) -> Self {
        Self {
            action,
            title: action.title(),
            shortcut: action.shortcut(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: String,
    /// Empty while the preview pane shows the issue
    pub title: String,
    pub subtitle: Subtitle,
    pub icon: RowIcon,
    pub keywords: Vec<String>,
    pub accessories: Vec<Accessory>,
    pub detail_markdown: String,
    pub actions: Vec<ActionEntry>,
}
