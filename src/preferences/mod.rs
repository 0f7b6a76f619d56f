//! Per-context workspace preferences.
//!
//! A [`PreferenceRecord`] holds the editor and workspace class a user picked
//! for a [`ContextKey`](crate::context::ContextKey). Records live in a
//! [`PreferenceStore`]; rows read them through the [`PreferenceAccessor`],
//! which hands out defaults until the store has answered.

pub mod accessor;
pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use accessor::PreferenceAccessor;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

pub const DEFAULT_EDITOR: &str = "code";

/// Workspace size class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EditorClass {
    #[default]
    Small,
    Large,
    Other(String),
}

impl EditorClass {
    pub fn as_str(&self) -> &str {
        match self {
            EditorClass::Small => "g1-standard",
            EditorClass::Large => "g1-large",
            EditorClass::Other(s) => s,
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(self, EditorClass::Large)
    }

    /// Single-letter badge shown in the accessory strip.
    pub fn badge(&self) -> &'static str {
        if self.is_large() { "L" } else { "S" }
    }
}

impl From<String> for EditorClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "g1-standard" => EditorClass::Small,
            "g1-large" => EditorClass::Large,
            _ => EditorClass::Other(value),
        }
    }
}

impl From<&str> for EditorClass {
    fn from(value: &str) -> Self {
        EditorClass::from(value.to_string())
    }
}

impl From<EditorClass> for String {
    fn from(class: EditorClass) -> Self {
        class.as_str().to_string()
    }
}

impl fmt::Display for EditorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    pub preferred_editor: String,
    pub preferred_editor_class: EditorClass,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            preferred_editor: DEFAULT_EDITOR.to_string(),
            preferred_editor_class: EditorClass::Small,
        }
    }
}

impl PreferenceRecord {
    pub fn new(editor: impl Into<String>, class: impl Into<EditorClass>) -> Self {
        Self {
            preferred_editor: editor.into(),
            preferred_editor_class: class.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_small() {
        let record = PreferenceRecord::default();
        assert_eq!(record.preferred_editor, "code");
        assert_eq!(record.preferred_editor_class, EditorClass::Small);
    }

    #[test]
    fn test_badge_letter() {
        assert_eq!(EditorClass::from("g1-large").badge(), "L");
        assert_eq!(EditorClass::from("g1-standard").badge(), "S");
        assert_eq!(EditorClass::from("g1-xlarge").badge(), "S");
        assert_eq!(EditorClass::from("").badge(), "S");
    }

    #[test]
    fn test_only_exact_class_names_are_recognised() {
        assert_eq!(EditorClass::from("large").badge(), "S");
        assert_eq!(EditorClass::from("G1-LARGE").badge(), "S");
        assert_eq!(EditorClass::from("small"), EditorClass::Other("small".to_string()));

        let json = r#"{"preferredEditor":"code","preferredEditorClass":"large"}"#;
        let record: PreferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.preferred_editor_class.badge(), "S");
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }

    #[test]
    fn test_unknown_class_round_trips_verbatim() {
        let json = r#"{"preferredEditor":"intellij","preferredEditorClass":"g2-gpu"}"#;
        let record: PreferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.preferred_editor_class,
            EditorClass::Other("g2-gpu".to_string())
        );
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
