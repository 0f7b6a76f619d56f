//! Workspace URLs and the system opener used by the command-line host.

use tokio::process::Command;
use url::Url;

use crate::error::{IssueRowError, Result};
use crate::host::WorkspaceRequest;

pub const DEFAULT_GITPOD_URL: &str = "https://gitpod.io";

/// Build `<base>/?editor=<editor>&workspaceClass=<class>#<url>`.
pub fn workspace_url(base: &str, request: &WorkspaceRequest) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| IssueRowError::Config(format!("invalid gitpod_url '{base}': {e}")))?;
    url.query_pairs_mut()
        .append_pair("editor", &request.preferences.preferred_editor)
        .append_pair(
            "workspaceClass",
            request.preferences.preferred_editor_class.as_str(),
        );
    url.set_fragment(Some(&request.url));
    Ok(url)
}

fn opener_command(target: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", target]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    }
}

/// Hand `target` to the platform's default URL handler.
pub async fn open_with_system(target: &str) -> Result<()> {
    let status = opener_command(target)
        .status()
        .await
        .map_err(|e| IssueRowError::Launch(format!("{target}: {e}")))?;
    if !status.success() {
        return Err(IssueRowError::Launch(format!(
            "{target}: opener exited with {status}"
        )));
    }
    tracing::debug!(%target, "opened with system handler");
    Ok(())
}
