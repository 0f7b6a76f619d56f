use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueRowError {
    #[error("action '{action}' is not available on this row (from_cache: {from_cache})")]
    ActionUnavailable {
        action: &'static str,
        from_cache: bool,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to launch '{0}'")]
    Launch(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, IssueRowError>;
