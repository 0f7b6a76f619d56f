use std::sync::Arc;

use async_trait::async_trait;
use gitpod_issues::{
    Accessory, Author, Comments, ConfigureOutcome, ConfigureRequest, ContextKey, EditorClass,
    Issue, IssueRowError, IssueState, MemoryPreferenceStore, PreferenceAccessor,
    PreferenceRecord, PreferenceStore, RecentsCache, Repository, Result, RowAction, RowHost,
    RowPresenter, SharedRecents, Toast, ToastStyle, WorkspaceRequest,
};
use jiff::tz::TimeZone;
use parking_lot::Mutex;

// ============================================================================
// Test host
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Visit(u64),
    Remove(u64),
    Launch(WorkspaceRequest),
    Open(String),
    Notify(Toast),
    Configure(ContextKey),
}

/// Records every effect and keeps a recents cache the way a launcher host would
struct RecordingHost {
    effects: Mutex<Vec<Effect>>,
    recents: SharedRecents,
    store: Arc<MemoryPreferenceStore>,
    configure_with: Option<PreferenceRecord>,
    fail_launch: bool,
}

impl RecordingHost {
    fn new(store: Arc<MemoryPreferenceStore>) -> Self {
        Self {
            effects: Mutex::new(Vec::new()),
            recents: SharedRecents::default(),
            store,
            configure_with: None,
            fail_launch: false,
        }
    }

    fn effects(&self) -> Vec<Effect> {
        self.effects.lock().clone()
    }
}

#[async_trait]
impl RowHost for RecordingHost {
    async fn visit_issue(&self, issue: &Issue) -> Result<()> {
        self.effects.lock().push(Effect::Visit(issue.number));
        self.recents.add(issue.clone());
        Ok(())
    }

    async fn remove_issue(&self, issue: &Issue) -> Result<()> {
        self.effects.lock().push(Effect::Remove(issue.number));
        self.recents.remove(&issue.id);
        Ok(())
    }

    async fn launch_workspace(&self, request: &WorkspaceRequest) -> Result<()> {
        if self.fail_launch {
            return Err(IssueRowError::Launch("gitpod unreachable".to_string()));
        }
        self.effects.lock().push(Effect::Launch(request.clone()));
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        self.effects.lock().push(Effect::Open(url.to_string()));
        Ok(())
    }

    async fn notify(&self, toast: Toast) -> Result<()> {
        self.effects.lock().push(Effect::Notify(toast));
        Ok(())
    }

    async fn configure(&self, request: &ConfigureRequest) -> Result<ConfigureOutcome> {
        self.effects
            .lock()
            .push(Effect::Configure(request.key.clone()));
        match &self.configure_with {
            Some(record) => {
                self.store.save(&request.key, record).await?;
                Ok(ConfigureOutcome::Saved)
            }
            None => Ok(ConfigureOutcome::Cancelled),
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn issue(id: &str, number: u64, comments: u32) -> Issue {
    Issue {
        id: id.to_string(),
        number,
        title: "Prebuilds time out".to_string(),
        url: format!("https://github.com/gitpod-io/gitpod/issues/{number}"),
        body: "The prebuild never finishes.".to_string(),
        state: IssueState::Open,
        state_reason: None,
        author: Some(Author {
            login: "octocat".to_string(),
            avatar_url: None,
        }),
        repository: Repository {
            name_with_owner: "gitpod-io/gitpod".to_string(),
        },
        comments: Comments {
            total_count: comments,
        },
        updated_at: "2024-06-03T14:05:00Z".parse().unwrap(),
    }
}

fn setup() -> (Arc<MemoryPreferenceStore>, PreferenceAccessor, RecordingHost) {
    let store = Arc::new(MemoryPreferenceStore::new());
    let accessor = PreferenceAccessor::new(store.clone());
    let host = RecordingHost::new(store.clone());
    (store, accessor, host)
}

// ============================================================================
// Accessories and title
// ============================================================================

#[tokio::test]
async fn test_comment_badge_leads_until_preview_is_shown() {
    let (_, accessor, host) = setup();
    let mut row = RowPresenter::new(issue("I_1", 12, 3), false, &accessor);

    let accessories = row.accessories_in(&TimeZone::UTC);
    assert!(matches!(accessories[0], Accessory::Comments { count: 3, .. }));
    assert_eq!(accessories[0].text().as_deref(), Some("3"));
    assert_eq!(row.title(), "Prebuilds time out");

    row.perform(RowAction::ShowPreview, &host, &accessor)
        .await
        .unwrap();
    assert!(row.is_body_visible());
    let accessories = row.accessories_in(&TimeZone::UTC);
    assert!(
        accessories
            .iter()
            .all(|a| !matches!(a, Accessory::Comments { .. }))
    );
    assert_eq!(row.title(), "");

    row.perform(RowAction::HidePreview, &host, &accessor)
        .await
        .unwrap();
    assert!(!row.is_body_visible());
    assert_eq!(row.title(), "Prebuilds time out");

    // toggling the preview has no external effects
    assert!(host.effects().is_empty());
}

#[tokio::test]
async fn test_editor_badge_shows_default_then_stored_class() {
    let (store, accessor, _) = setup();
    let i = issue("I_1", 12, 0);
    store
        .save(
            &ContextKey::for_issue(&i),
            &PreferenceRecord::new("code", "g1-large"),
        )
        .await
        .unwrap();

    let row = RowPresenter::new(i, false, &accessor);
    let editor_badge = |row: &RowPresenter| row.accessories_in(&TimeZone::UTC)[1].clone();

    assert_eq!(editor_badge(&row).text().as_deref(), Some("S"));
    row.resolve_preferences(&accessor).await;
    assert_eq!(editor_badge(&row).text().as_deref(), Some("L"));
}

#[tokio::test]
async fn test_unknown_class_shows_small_badge() {
    let (store, accessor, _) = setup();
    let i = issue("I_1", 12, 0);
    store
        .save(
            &ContextKey::for_issue(&i),
            &PreferenceRecord::new("code", "g1-xlarge"),
        )
        .await
        .unwrap();
    let row = RowPresenter::new(i, false, &accessor);
    row.resolve_preferences(&accessor).await;

    let badge = row.accessories_in(&TimeZone::UTC)[1].clone();
    assert_eq!(badge.text().as_deref(), Some("S"));
    assert_eq!(badge.tooltip(), Some("Editor: code, Class: g1-xlarge "));
}

// ============================================================================
// Action matrix
// ============================================================================

#[tokio::test]
async fn test_recents_row_action_set() {
    let (_, accessor, _) = setup();
    let row = RowPresenter::new(issue("I_1", 12, 0), true, &accessor);
    let actions = row.actions();

    assert!(actions.contains(&RowAction::RemoveFromRecents));
    assert!(!actions.contains(&RowAction::ShowPreview));
    assert!(!actions.contains(&RowAction::HidePreview));
    assert!(!actions.contains(&RowAction::AddToRecents));
    assert!(actions.contains(&RowAction::OpenInWorkspace));
    assert!(actions.contains(&RowAction::ViewInBrowser));
    assert!(actions.contains(&RowAction::ConfigureWorkspace));
}

#[tokio::test]
async fn test_unavailable_action_is_rejected_without_effects() {
    let (_, accessor, host) = setup();
    let mut row = RowPresenter::new(issue("I_1", 12, 0), true, &accessor);

    let err = row
        .perform(RowAction::ShowPreview, &host, &accessor)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        IssueRowError::ActionUnavailable {
            from_cache: true,
            ..
        }
    ));
    assert!(!row.is_body_visible());

    let mut live = RowPresenter::new(issue("I_2", 13, 0), false, &accessor);
    assert!(
        live.perform(RowAction::RemoveFromRecents, &host, &accessor)
            .await
            .is_err()
    );
    assert!(host.effects().is_empty());
}

// ============================================================================
// Side effects
// ============================================================================

#[tokio::test]
async fn test_open_in_workspace_visits_before_launching() {
    let (store, accessor, host) = setup();
    let i = issue("I_1", 12, 0);
    let key = ContextKey::for_issue(&i);
    store
        .save(&key, &PreferenceRecord::new("intellij", "g1-large"))
        .await
        .unwrap();

    // preferences are resolved on demand even if the row never resolved them
    let mut row = RowPresenter::new(i, false, &accessor);
    row.perform(RowAction::OpenInWorkspace, &host, &accessor)
        .await
        .unwrap();

    let effects = host.effects();
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::Visit(12));
    match &effects[1] {
        Effect::Launch(request) => {
            assert_eq!(request.url, "https://github.com/gitpod-io/gitpod/issues/12");
            assert_eq!(request.repository, "gitpod-io/gitpod");
            assert_eq!(request.context, "Prebuilds time out");
            assert_eq!(request.preferences.preferred_editor, "intellij");
            assert_eq!(request.preferences.preferred_editor_class, EditorClass::Large);
        }
        other => panic!("expected launch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_view_in_browser_visits_then_opens() {
    let (_, accessor, host) = setup();
    let mut row = RowPresenter::new(issue("I_1", 12, 0), true, &accessor);
    row.perform(RowAction::ViewInBrowser, &host, &accessor)
        .await
        .unwrap();
    assert_eq!(
        host.effects(),
        vec![
            Effect::Visit(12),
            Effect::Open("https://github.com/gitpod-io/gitpod/issues/12".to_string())
        ]
    );
}

#[tokio::test]
async fn test_add_and_remove_recents_notify_with_issue_number() {
    let (_, accessor, host) = setup();
    let i = issue("I_1", 12, 0);

    let mut live = RowPresenter::new(i.clone(), false, &accessor);
    live.perform(RowAction::AddToRecents, &host, &accessor)
        .await
        .unwrap();
    assert!(host.recents.contains("I_1"));

    let mut cached = RowPresenter::new(i, true, &accessor);
    cached
        .perform(RowAction::RemoveFromRecents, &host, &accessor)
        .await
        .unwrap();
    assert!(!host.recents.contains("I_1"));

    assert_eq!(
        host.effects(),
        vec![
            Effect::Visit(12),
            Effect::Notify(Toast::new(
                "Added Issue \"#12\" to Recents",
                ToastStyle::Success
            )),
            Effect::Remove(12),
            Effect::Notify(Toast::new(
                "Removed Issue #12 from Recents",
                ToastStyle::Success
            )),
        ]
    );
}

#[tokio::test]
async fn test_configure_saved_revalidates_row() {
    let (store, accessor, mut host) = setup();
    host.configure_with = Some(PreferenceRecord::new("vim", "g1-large"));

    let mut row = RowPresenter::new(issue("I_1", 12, 0), false, &accessor);
    row.resolve_preferences(&accessor).await;
    assert_eq!(row.preferences(), PreferenceRecord::default());

    row.perform(RowAction::ConfigureWorkspace, &host, &accessor)
        .await
        .unwrap();

    assert_eq!(row.preferences(), PreferenceRecord::new("vim", "g1-large"));
    assert_eq!(
        row.accessories_in(&TimeZone::UTC)[1].text().as_deref(),
        Some("L")
    );
    assert_eq!(
        store.load(row.key()).await.unwrap(),
        Some(PreferenceRecord::new("vim", "g1-large"))
    );
}

#[tokio::test]
async fn test_configure_cancelled_keeps_preferences() {
    let (_, accessor, host) = setup();
    let mut row = RowPresenter::new(issue("I_1", 12, 0), true, &accessor);
    row.perform(RowAction::ConfigureWorkspace, &host, &accessor)
        .await
        .unwrap();
    assert_eq!(row.preferences(), PreferenceRecord::default());
    assert_eq!(host.effects(), vec![Effect::Configure(row.key().clone())]);
}

#[tokio::test]
async fn test_configure_republishes_to_other_rows_with_same_context() {
    let (_, accessor, mut host) = setup();
    host.configure_with = Some(PreferenceRecord::new("code", "g1-large"));

    let mut a = RowPresenter::new(issue("I_1", 12, 0), false, &accessor);
    let mut b = RowPresenter::new(issue("I_2", 99, 0), true, &accessor);

    let waiter = tokio::spawn(async move {
        assert!(b.preferences_changed().await);
        b.preferences()
    });

    a.perform(RowAction::ConfigureWorkspace, &host, &accessor)
        .await
        .unwrap();

    let seen = waiter.await.unwrap();
    assert_eq!(seen.preferred_editor_class, EditorClass::Large);
}

#[tokio::test]
async fn test_host_failure_propagates_after_visit() {
    let (_, accessor, mut host) = setup();
    host.fail_launch = true;
    let mut row = RowPresenter::new(issue("I_1", 12, 0), false, &accessor);

    let err = row
        .perform(RowAction::OpenInWorkspace, &host, &accessor)
        .await
        .unwrap_err();
    assert!(matches!(err, IssueRowError::Launch(_)));
    assert_eq!(host.effects(), vec![Effect::Visit(12)]);
}

// ============================================================================
// Recents independent of live results
// ============================================================================

#[tokio::test]
async fn test_recents_survive_outside_live_results() {
    let (_, accessor, host) = setup();
    for n in [1, 2, 3] {
        let mut row = RowPresenter::new(issue(&format!("I_{n}"), n, 0), false, &accessor);
        row.perform(RowAction::ViewInBrowser, &host, &accessor)
            .await
            .unwrap();
    }
    // revisiting promotes rather than duplicates
    let mut row = RowPresenter::new(issue("I_1", 1, 0), false, &accessor);
    row.perform(RowAction::AddToRecents, &host, &accessor)
        .await
        .unwrap();

    let numbers: Vec<u64> = host.recents.list().iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 3, 2]);

    let cache: RecentsCache = host.recents.list().into();
    assert_eq!(cache.len(), 3);
}
