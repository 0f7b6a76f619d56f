use std::path::Path;

use futures::future::join_all;
use owo_colors::OwoColorize;
use serde_json::json;

use super::row::print_rows;
use super::{load_recents, preference_accessor, preference_store, read_issues};
use crate::config::Config;
use crate::display::format_toast;
use crate::error::Result;
use crate::paths;
use crate::recents::RecentsCache;
use crate::row::RowPresenter;
use crate::toast::Toast;

/// List recents as recents-view rows, most recent first
pub async fn cmd_recents_list(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let cache = load_recents()?;

    if cache.is_empty() {
        if output_json {
            println!("{}", json!([]));
        } else {
            println!("{}", "No recent issues".dimmed());
        }
        return Ok(());
    }

    let accessor = preference_accessor(&config, preference_store());
    let rows: Vec<RowPresenter> = cache
        .list()
        .into_iter()
        .map(|issue| RowPresenter::new(issue, true, &accessor))
        .collect();
    join_all(rows.iter().map(|row| row.resolve_preferences(&accessor))).await;

    print_rows(&rows, false, output_json)
}

/// Add issues to recents; the last issue in the file ends up most recent
pub fn cmd_recents_add(file: &Path) -> Result<()> {
    let config = Config::load()?;
    let issues = read_issues(file)?;
    let path = paths::recents_path();
    let mut cache = RecentsCache::load(&path)?;

    let mut toasts = Vec::with_capacity(issues.len());
    for issue in issues {
        toasts.push(Toast::success(format!(
            "Added Issue \"#{}\" to Recents",
            issue.number
        )));
        cache.add(issue);
    }
    cache.truncate(config.recents_limit);
    cache.save(&path)?;

    for toast in &toasts {
        println!("{}", format_toast(toast));
    }
    Ok(())
}

/// Remove an issue from recents; absent ids are not an error
pub fn cmd_recents_remove(id: &str) -> Result<()> {
    let path = paths::recents_path();
    let mut cache = RecentsCache::load(&path)?;

    match cache.remove(id) {
        Some(issue) => {
            cache.save(&path)?;
            let toast = Toast::success(format!("Removed Issue #{} from Recents", issue.number));
            println!("{}", format_toast(&toast));
        }
        None => println!("{}", format!("'{id}' is not in recents").dimmed()),
    }
    Ok(())
}

pub fn cmd_recents_clear() -> Result<()> {
    let path = paths::recents_path();
    let mut cache = RecentsCache::load(&path)?;
    let count = cache.len();
    cache.clear();
    cache.save(&path)?;
    println!("Cleared {count} recent issue(s)");
    Ok(())
}
