use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::context::EntityType;
use crate::row::RowAction;

#[derive(Parser)]
#[command(name = "gitpod-issues")]
#[command(about = "Issue rows, workspace preferences and recents for the Gitpod launcher")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render list rows for issues read from a JSON file
    Row {
        /// JSON file with one issue or an array of issues ('-' for stdin)
        file: PathBuf,

        /// Render as rows of the recents view
        #[arg(long)]
        from_cache: bool,

        /// Render with the issue preview shown
        #[arg(long)]
        preview: bool,

        /// Show tooltips, keywords and the action panel
        #[arg(long)]
        detail: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Perform a row action on an issue
    Act {
        /// open, view, show-preview, hide-preview, add-recent, remove-recent, configure
        #[arg(value_parser = parse_action)]
        action: RowAction,

        /// JSON file with the issue ('-' for stdin)
        file: PathBuf,

        /// Act on the row as shown in the recents view
        #[arg(long)]
        from_cache: bool,

        /// Editor to save when configuring
        #[arg(long)]
        editor: Option<String>,

        /// Workspace class to save when configuring (e.g. g1-standard, g1-large)
        #[arg(long)]
        class: Option<String>,

        /// Print URLs instead of opening them
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage recently visited issues
    Recents {
        #[command(subcommand)]
        action: RecentsAction,
    },

    /// Manage per-context workspace preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum RecentsAction {
    /// List recents, most recent first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add issues from a JSON file
    Add {
        /// JSON file with one issue or an array of issues ('-' for stdin)
        file: PathBuf,
    },
    /// Remove an issue by id
    #[command(visible_alias = "rm")]
    Remove {
        /// Issue node ID
        id: String,
    },
    /// Remove every recent
    Clear,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show the preferences resolved for a context
    Show {
        /// Repository as owner/name
        repository: String,
        /// Context (the issue title for issues)
        context: String,
        /// Entity type
        #[arg(short = 't', long = "type", default_value = "issue", value_parser = parse_entity_type)]
        entity_type: EntityType,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store preferences for a context
    Set {
        /// Repository as owner/name
        repository: String,
        /// Context (the issue title for issues)
        context: String,
        /// Entity type
        #[arg(short = 't', long = "type", default_value = "issue", value_parser = parse_entity_type)]
        entity_type: EntityType,
        /// Preferred editor
        #[arg(long)]
        editor: Option<String>,
        /// Workspace class (e.g. g1-standard, g1-large)
        #[arg(long)]
        class: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Config key (gitpod_url, recents_limit, default_editor, default_editor_class)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Config key
        key: String,
    },
}

fn parse_action(s: &str) -> Result<RowAction, String> {
    s.parse().map_err(|e: crate::error::IssueRowError| e.to_string())
}

fn parse_entity_type(s: &str) -> Result<EntityType, String> {
    s.parse().map_err(|e: crate::error::IssueRowError| e.to_string())
}
