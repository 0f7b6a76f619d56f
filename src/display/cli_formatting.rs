use jiff::Timestamp;
use owo_colors::OwoColorize;

use crate::row::{Accessory, RowView};
use crate::toast::Toast;

/// Short age of `date` relative to `now` (e.g. `5m`, `3h`, `2d`).
///
/// Anything older than eight weeks is shown as a calendar date.
pub fn format_age(date: Timestamp, now: Timestamp) -> String {
    let seconds = now.duration_since(date).as_secs();
    match seconds {
        s if s < 60 => "now".to_string(),
        s if s < 3_600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3_600),
        s if s < 7 * 86_400 => format!("{}d", s / 86_400),
        s if s < 8 * 7 * 86_400 => format!("{}w", s / (7 * 86_400)),
        _ => date.strftime("%Y-%m-%d").to_string(),
    }
}

/// Format one accessory for the single-line row display
pub fn format_accessory(accessory: &Accessory, now: Timestamp) -> String {
    match accessory {
        Accessory::Comments { count, icon } => format!("{} {}", icon.glyph(), count),
        Accessory::Updated(updated) => format_age(updated.date, now).dimmed().to_string(),
        Accessory::EditorClass { text, icon, .. } => {
            format!("{} {}", icon.glyph(), text).yellow().to_string()
        }
        Accessory::Author { login, icon, .. } => {
            format!("{}{}", icon.glyph(), login).blue().to_string()
        }
    }
}

/// Format a row for single-line display with colors
pub fn format_row_line(view: &RowView, now: Timestamp) -> String {
    let accessories: Vec<String> = view
        .accessories
        .iter()
        .map(|a| format_accessory(a, now))
        .collect();

    format!(
        "{} {:>7} {}  {}",
        super::format_status_icon(&view.icon.icon),
        view.subtitle.value.cyan(),
        view.title,
        accessories.join("  ")
    )
}

/// Format a row with tooltips, keywords, detail and the action panel
pub fn format_row_detail(view: &RowView, now: Timestamp) -> String {
    let mut output = format_row_line(view, now);

    output.push_str(&format!("\n  {}", view.subtitle.tooltip.dimmed()));
    output.push_str(&format!("\n  {}", view.icon.tooltip.dimmed()));
    for tooltip in view.accessories.iter().filter_map(|a| a.tooltip()) {
        output.push_str(&format!("\n  {}", tooltip.dimmed()));
    }
    output.push_str(&format!(
        "\n  {} {}",
        "Keywords:".dimmed(),
        view.keywords.join(", ")
    ));

    if view.title.is_empty() {
        output.push_str("\n\n");
        for line in view.detail_markdown.lines() {
            output.push_str(&format!("  {line}\n"));
        }
    } else {
        output.push('\n');
    }

    output.push_str(&format!("  {}", "Actions:".bold()));
    for entry in &view.actions {
        let shortcut = entry
            .shortcut
            .map(|s| format!(" ({s})"))
            .unwrap_or_default();
        output.push_str(&format!(
            "\n    {:<14} {}{}",
            entry.action.slug().cyan(),
            entry.title,
            shortcut.dimmed()
        ));
    }
    output
}

pub fn format_toast(toast: &Toast) -> String {
    toast.title.color(toast.color()).to_string()
}
