//! Presenter for a single issue row.
//!
//! Combines the issue's projections, the row's context-key preferences and
//! the row's origin (live listing or recents) into the accessory strip and
//! the action panel, and runs the actions against a [`RowHost`].

pub mod action;
pub mod view;

use jiff::tz::TimeZone;
use tokio::sync::watch;

use crate::context::ContextKey;
use crate::error::{IssueRowError, Result};
use crate::host::{ConfigureOutcome, ConfigureRequest, RowHost, WorkspaceRequest};
use crate::issue::Issue;
use crate::preferences::{PreferenceAccessor, PreferenceRecord};
use crate::projection::{Icon, format_updated_at_in, project_author, project_status};
use crate::toast::Toast;

pub use action::{PreviewState, RowAction, Shortcut, available_actions};
pub use view::{Accessory, ActionEntry, RowIcon, RowView, Subtitle};

pub struct RowPresenter {
    issue: Issue,
    from_cache: bool,
    preview: PreviewState,
    key: ContextKey,
    preferences: watch::Receiver<PreferenceRecord>,
}

impl RowPresenter {
    /// Create a presenter showing whatever `accessor` currently holds for the
    /// issue's context key. Resolution happens separately (see
    /// [`RowPresenter::resolve_preferences`]) so the row renders immediately.
    pub fn new(issue: Issue, from_cache: bool, accessor: &PreferenceAccessor) -> Self {
        let key = ContextKey::for_issue(&issue);
        let preferences = accessor.subscribe(&key);
        Self {
            issue,
            from_cache,
            preview: PreviewState::Hidden,
            key,
            preferences,
        }
    }

    /// Start with the preview shown. Recents rows never show it.
    pub fn with_body_visible(mut self, visible: bool) -> Self {
        if visible && !self.from_cache {
            self.preview = PreviewState::Visible;
        }
        self
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn key(&self) -> &ContextKey {
        &self.key
    }

    pub fn from_cache(&self) -> bool {
        self.from_cache
    }

    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    pub fn is_body_visible(&self) -> bool {
        self.preview.is_visible()
    }

    pub fn preferences(&self) -> PreferenceRecord {
        self.preferences.borrow().clone()
    }

    pub async fn resolve_preferences(&self, accessor: &PreferenceAccessor) -> PreferenceRecord {
        accessor.resolve(&self.key).await
    }

    /// Wait until new preferences are published for this row's key.
    ///
    /// Returns `false` once the accessor is gone and no update can follow.
    pub async fn preferences_changed(&mut self) -> bool {
        self.preferences.changed().await.is_ok()
    }

    pub fn actions(&self) -> Vec<RowAction> {
        available_actions(self.from_cache)
    }

    pub fn title(&self) -> &str {
        if self.is_body_visible() {
            ""
        } else {
            &self.issue.title
        }
    }

    pub fn keywords(&self) -> Vec<String> {
        let mut keywords = vec![self.issue.number.to_string()];
        if let Some(login) = self.issue.author_login() {
            keywords.push(login.to_string());
        }
        keywords
    }

    pub fn accessories(&self) -> Vec<Accessory> {
        self.accessories_in(&TimeZone::system())
    }

    pub fn accessories_in(&self, tz: &TimeZone) -> Vec<Accessory> {
        let preferences = self.preferences();
        let author = project_author(&self.issue);
        let mut accessories = Vec::with_capacity(4);

        // redundant once the preview shows the body
        let comments = self.issue.comment_count();
        if comments > 0 && !self.is_body_visible() {
            accessories.push(Accessory::Comments {
                count: comments,
                icon: Icon::Bubble,
            });
        }

        accessories.push(Accessory::Updated(format_updated_at_in(&self.issue, tz)));
        accessories.push(Accessory::EditorClass {
            text: preferences.preferred_editor_class.badge(),
            icon: Icon::ComputerChip,
            tooltip: format!(
                "Editor: {}, Class: {} ",
                preferences.preferred_editor, preferences.preferred_editor_class
            ),
        });
        accessories.push(Accessory::Author {
            tooltip: format!("Author: {}", author.text),
            login: author.text,
            icon: author.icon,
        });

        accessories
    }

    pub fn view(&self) -> RowView {
        self.view_in(&TimeZone::system())
    }

    pub fn view_in(&self, tz: &TimeZone) -> RowView {
        let status = project_status(&self.issue);
        RowView {
            id: self.issue.id.clone(),
            title: self.title().to_string(),
            subtitle: Subtitle {
                value: format!("#{}", self.issue.number),
                tooltip: format!("Repository: {}", self.issue.repository_name()),
            },
            icon: RowIcon {
                icon: status.icon,
                tooltip: format!("Status: {}", status.text),
            },
            keywords: self.keywords(),
            accessories: self.accessories_in(tz),
            detail_markdown: format!("## {}\n\n {}", self.issue.title, self.issue.body),
            actions: self.actions().into_iter().map(ActionEntry::from).collect(),
        }
    }

    /// Run `action` against `host`.
    ///
    /// Actions not offered on this row fail with
    /// [`IssueRowError::ActionUnavailable`] before any side effect. Host
    /// failures are returned as-is.
    pub async fn perform(
        &mut self,
        action: RowAction,
        host: &dyn RowHost,
        accessor: &PreferenceAccessor,
    ) -> Result<()> {
        if !action.is_available(self.from_cache) {
            return Err(IssueRowError::ActionUnavailable {
                action: action.title(),
                from_cache: self.from_cache,
            });
        }

        tracing::debug!(
            action = action.slug(),
            issue = self.issue.number,
            from_cache = self.from_cache,
            "performing row action"
        );

        match action {
            RowAction::OpenInWorkspace => {
                host.visit_issue(&self.issue).await?;
                let preferences = accessor.resolve(&self.key).await;
                let request = WorkspaceRequest::new(&self.issue.url, &self.key, preferences);
                host.launch_workspace(&request).await?;
            }
            RowAction::ViewInBrowser => {
                host.visit_issue(&self.issue).await?;
                host.open_url(&self.issue.url).await?;
            }
            RowAction::ShowPreview | RowAction::HidePreview => {
                if let Some(next) = self.preview.transition(action, self.from_cache) {
                    self.preview = next;
                }
            }
            RowAction::AddToRecents => {
                host.visit_issue(&self.issue).await?;
                host.notify(Toast::success(format!(
                    "Added Issue \"#{}\" to Recents",
                    self.issue.number
                )))
                .await?;
            }
            RowAction::RemoveFromRecents => {
                host.remove_issue(&self.issue).await?;
                host.notify(Toast::success(format!(
                    "Removed Issue #{} from Recents",
                    self.issue.number
                )))
                .await?;
            }
            RowAction::ConfigureWorkspace => {
                let request = ConfigureRequest {
                    key: self.key.clone(),
                    current: self.preferences(),
                };
                if host.configure(&request).await? == ConfigureOutcome::Saved {
                    accessor.revalidate(&self.key).await;
                }
            }
        }

        Ok(())
    }
}
