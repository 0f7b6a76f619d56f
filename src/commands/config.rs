//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{Config, VALID_KEYS};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "gitpod_url": config.gitpod_url,
        "recents_limit": config.recents_limit,
        "default_editor": config.default_editor,
        "default_editor_class": config.default_editor_class,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = format!("{}\n\n", "Configuration:".cyan().bold());
    for key in VALID_KEYS {
        text_output.push_str(&format!("{}: {}\n", key.cyan(), config.get(key)?));
    }
    text_output.push('\n');
    text_output.push_str(
        &format!("Config file: {}", Config::config_path().display())
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {} = {}", key.cyan(), config.get(key)?);
    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}
