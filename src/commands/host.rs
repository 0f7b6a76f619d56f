use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::display::format_toast;
use crate::error::Result;
use crate::host::{ConfigureOutcome, ConfigureRequest, RowHost, WorkspaceRequest};
use crate::issue::Issue;
use crate::preferences::{EditorClass, PreferenceRecord, PreferenceStore};
use crate::recents::SharedRecents;
use crate::toast::Toast;
use crate::workspace::{open_with_system, workspace_url};

/// Row host backed by the data-root files and the system URL opener.
pub struct CliHost {
    config: Config,
    recents: SharedRecents,
    recents_path: PathBuf,
    store: Arc<dyn PreferenceStore>,
    dry_run: bool,
    editor: Option<String>,
    class: Option<String>,
}

impl CliHost {
    pub fn new(
        config: Config,
        recents: SharedRecents,
        recents_path: PathBuf,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            config,
            recents,
            recents_path,
            store,
            dry_run: false,
            editor: None,
            class: None,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Values the configure sub-view saves; with neither set it cancels.
    pub fn configure_with(mut self, editor: Option<String>, class: Option<String>) -> Self {
        self.editor = editor;
        self.class = class;
        self
    }

    async fn open(&self, target: &str) -> Result<()> {
        if self.dry_run {
            println!("{target}");
            return Ok(());
        }
        if let Err(e) = open_with_system(target).await {
            self.notify(Toast::failure(format!("Failed to open {target}")))
                .await?;
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl RowHost for CliHost {
    async fn visit_issue(&self, issue: &Issue) -> Result<()> {
        self.recents.add(issue.clone());
        let evicted = self.recents.truncate(self.config.recents_limit);
        if !evicted.is_empty() {
            tracing::debug!(count = evicted.len(), "evicted old recents");
        }
        self.recents.save(&self.recents_path).await
    }

    async fn remove_issue(&self, issue: &Issue) -> Result<()> {
        self.recents.remove(&issue.id);
        self.recents.save(&self.recents_path).await
    }

    async fn launch_workspace(&self, request: &WorkspaceRequest) -> Result<()> {
        let url = workspace_url(&self.config.gitpod_url, request)?;
        self.open(url.as_str()).await
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        self.open(url).await
    }

    async fn notify(&self, toast: Toast) -> Result<()> {
        println!("{}", format_toast(&toast));
        Ok(())
    }

    async fn configure(&self, request: &ConfigureRequest) -> Result<ConfigureOutcome> {
        if self.editor.is_none() && self.class.is_none() {
            println!(
                "{} editor {}, class {} {}",
                "Workspace:".bold(),
                request.current.preferred_editor,
                request.current.preferred_editor_class,
                "(pass --editor or --class to change)".dimmed()
            );
            return Ok(ConfigureOutcome::Cancelled);
        }

        let record = PreferenceRecord {
            preferred_editor: self
                .editor
                .clone()
                .unwrap_or_else(|| request.current.preferred_editor.clone()),
            preferred_editor_class: self
                .class
                .as_deref()
                .map(EditorClass::from)
                .unwrap_or_else(|| request.current.preferred_editor_class.clone()),
        };
        self.store.save(&request.key, &record).await?;
        Ok(ConfigureOutcome::Saved)
    }
}
