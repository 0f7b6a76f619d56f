use clap::Parser;
use std::env;
use std::process::ExitCode;

use gitpod_issues::cli::{Cli, Commands, ConfigAction, PrefsAction, RecentsAction};
use gitpod_issues::commands::{
    ActOptions, cmd_act, cmd_config_get, cmd_config_set, cmd_config_show, cmd_prefs_set,
    cmd_prefs_show, cmd_recents_add, cmd_recents_clear, cmd_recents_list, cmd_recents_remove,
    cmd_row,
};
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GITPOD_ISSUES_LOG")
        .unwrap_or_else(|_| EnvFilter::new("gitpod_issues=warn"));

    let format = env::var("GITPOD_ISSUES_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Row {
            file,
            from_cache,
            preview,
            detail,
            json,
        } => cmd_row(&file, from_cache, preview, detail, json).await,

        Commands::Act {
            action,
            file,
            from_cache,
            editor,
            class,
            dry_run,
        } => {
            cmd_act(
                action,
                &file,
                ActOptions {
                    from_cache,
                    editor,
                    class,
                    dry_run,
                },
            )
            .await
        }

        Commands::Recents { action } => match action {
            RecentsAction::List { json } => cmd_recents_list(json).await,
            RecentsAction::Add { file } => cmd_recents_add(&file),
            RecentsAction::Remove { id } => cmd_recents_remove(&id),
            RecentsAction::Clear => cmd_recents_clear(),
        },

        Commands::Prefs { action } => match action {
            PrefsAction::Show {
                repository,
                context,
                entity_type,
                json,
            } => cmd_prefs_show(entity_type, &repository, &context, json).await,
            PrefsAction::Set {
                repository,
                context,
                entity_type,
                editor,
                class,
            } => {
                cmd_prefs_set(
                    entity_type,
                    &repository,
                    &context,
                    editor.as_deref(),
                    class.as_deref(),
                )
                .await
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
