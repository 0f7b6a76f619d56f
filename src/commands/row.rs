use std::path::Path;

use futures::future::join_all;
use jiff::Timestamp;

use super::{CommandOutput, preference_accessor, preference_store, read_issues};
use crate::config::Config;
use crate::display::{format_row_detail, format_row_line};
use crate::error::Result;
use crate::row::{RowPresenter, RowView};

/// Render rows for the issues in `file`
pub async fn cmd_row(
    file: &Path,
    from_cache: bool,
    preview: bool,
    detail: bool,
    output_json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let issues = read_issues(file)?;
    let accessor = preference_accessor(&config, preference_store());

    let rows: Vec<RowPresenter> = issues
        .into_iter()
        .map(|issue| RowPresenter::new(issue, from_cache, &accessor).with_body_visible(preview))
        .collect();

    // Each row resolves its own context key; none waits on another.
    join_all(rows.iter().map(|row| row.resolve_preferences(&accessor))).await;

    print_rows(&rows, detail, output_json)
}

pub(super) fn print_rows(rows: &[RowPresenter], detail: bool, output_json: bool) -> Result<()> {
    let now = Timestamp::now();
    let views: Vec<RowView> = rows.iter().map(RowPresenter::view).collect();

    let rendered: Vec<String> = views
        .iter()
        .map(|view| {
            if detail {
                format_row_detail(view, now)
            } else {
                format_row_line(view, now)
            }
        })
        .collect();
    let separator = if detail { "\n\n" } else { "\n" };

    CommandOutput::new(serde_json::to_value(&views)?)
        .with_text(rendered.join(separator))
        .print(output_json)
}
