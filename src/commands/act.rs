use std::path::Path;

use owo_colors::OwoColorize;

use super::{CliHost, preference_accessor, preference_store, read_issues};
use crate::config::Config;
use crate::display::format_row_detail;
use crate::error::Result;
use crate::paths;
use crate::recents::{RecentsCache, SharedRecents};
use crate::row::{RowAction, RowPresenter};

#[derive(Debug, Default)]
pub struct ActOptions {
    pub from_cache: bool,
    pub editor: Option<String>,
    pub class: Option<String>,
    pub dry_run: bool,
}

/// Perform `action` on every issue in `file` through the command-line host
pub async fn cmd_act(action: RowAction, file: &Path, options: ActOptions) -> Result<()> {
    let config = Config::load()?;
    let issues = read_issues(file)?;
    let store = preference_store();
    let accessor = preference_accessor(&config, store.clone());

    let recents_path = paths::recents_path();
    let recents = SharedRecents::new(RecentsCache::load(&recents_path)?);
    let host = CliHost::new(config, recents, recents_path, store)
        .dry_run(options.dry_run)
        .configure_with(options.editor, options.class);

    for issue in issues {
        let mut row = RowPresenter::new(issue, options.from_cache, &accessor);
        row.resolve_preferences(&accessor).await;
        row.perform(action, &host, &accessor).await?;

        match action {
            RowAction::ShowPreview | RowAction::HidePreview => {
                println!("{}", format_row_detail(&row.view(), jiff::Timestamp::now()));
            }
            RowAction::ConfigureWorkspace => {
                let preferences = row.preferences();
                println!(
                    "{} Editor: {}, Class: {}",
                    format!("#{}", row.issue().number).cyan(),
                    preferences.preferred_editor,
                    preferences.preferred_editor_class
                );
            }
            _ => {}
        }
    }

    Ok(())
}
