use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, preference_accessor, preference_store};
use crate::config::Config;
use crate::context::{ContextKey, EntityType};
use crate::error::{IssueRowError, Result};
use crate::preferences::{EditorClass, PreferenceRecord};

fn preferences_json(key: &ContextKey, record: &PreferenceRecord, stored: bool) -> serde_json::Value {
    json!({
        "type": key.entity_type,
        "repository": key.repository,
        "context": key.context,
        "preferredEditor": record.preferred_editor,
        "preferredEditorClass": record.preferred_editor_class,
        "stored": stored,
    })
}

fn preferences_text(key: &ContextKey, record: &PreferenceRecord, stored: bool) -> String {
    let source = if stored { "stored" } else { "default" };
    format!(
        "{}\n  editor: {}\n  class:  {} [{}]\n  {}",
        key.to_string().cyan(),
        record.preferred_editor,
        record.preferred_editor_class,
        record.preferred_editor_class.badge(),
        format!("({source})").dimmed()
    )
}

/// Show the preferences a row with this context would resolve
pub async fn cmd_prefs_show(
    entity_type: EntityType,
    repository: &str,
    context: &str,
    output_json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let store = preference_store();
    let key = ContextKey::new(entity_type, repository, context);

    let stored = store.load(&key).await?.is_some();
    let accessor = preference_accessor(&config, store);
    let record = accessor.resolve(&key).await;

    CommandOutput::new(preferences_json(&key, &record, stored))
        .with_text(preferences_text(&key, &record, stored))
        .print(output_json)
}

/// Store preferences for a context, keeping unspecified fields
pub async fn cmd_prefs_set(
    entity_type: EntityType,
    repository: &str,
    context: &str,
    editor: Option<&str>,
    class: Option<&str>,
) -> Result<()> {
    if editor.is_none() && class.is_none() {
        return Err(IssueRowError::Config(
            "nothing to set: pass --editor and/or --class".to_string(),
        ));
    }

    let config = Config::load()?;
    let accessor = preference_accessor(&config, preference_store());
    let key = ContextKey::new(entity_type, repository, context);

    let mut record = accessor.resolve(&key).await;
    if let Some(editor) = editor {
        record.preferred_editor = editor.to_string();
    }
    if let Some(class) = class {
        record.preferred_editor_class = EditorClass::from(class);
    }

    let saved = accessor.save(&key, &record).await?;
    println!("{}", preferences_text(&key, &saved, true));
    Ok(())
}
