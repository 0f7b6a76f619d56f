use crate::projection::Icon;
use owo_colors::OwoColorize;

pub mod cli_formatting;

pub use cli_formatting::*;

/// Status icon glyph, colored the way the launcher tints it
pub fn format_status_icon(icon: &Icon) -> String {
    let glyph = icon.glyph();
    match icon {
        Icon::IssueOpened => glyph.green().to_string(),
        Icon::IssueClosed => glyph.magenta().to_string(),
        Icon::IssueNotPlanned => glyph.dimmed().to_string(),
        _ => glyph.yellow().to_string(),
    }
}
