pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod fs;
pub mod host;
pub mod issue;
pub mod paths;
pub mod preferences;
pub mod projection;
pub mod recents;
pub mod row;
pub mod toast;
pub mod workspace;

pub mod cli;
pub mod commands;

pub use config::Config;
pub use context::{ContextKey, EntityType};
pub use error::{IssueRowError, Result};
pub use host::{ConfigureOutcome, ConfigureRequest, RowHost, WorkspaceRequest};
pub use issue::{Author, Comments, Issue, IssueState, Repository, StateReason, parse_issues};
pub use preferences::{
    EditorClass, FilePreferenceStore, MemoryPreferenceStore, PreferenceAccessor, PreferenceRecord,
    PreferenceStore,
};
pub use projection::{Badge, Icon, UpdatedAt, format_updated_at, project_author, project_status};
pub use recents::{RecentsCache, SharedRecents};
pub use row::{Accessory, PreviewState, RowAction, RowPresenter, RowView};
pub use toast::{Toast, ToastStyle};
