use std::path::PathBuf;

pub const ROOT_ENV: &str = "GITPOD_ISSUES_ROOT";

/// Returns the directory holding configuration, preferences and recents.
///
/// Resolution order:
/// 1. `GITPOD_ISSUES_ROOT` environment variable (if set)
/// 2. The platform data directory for `gitpod-issues`
/// 3. Current working directory + `.gitpod-issues`
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV)
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    directories::ProjectDirs::from("io", "gitpod", "gitpod-issues")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".gitpod-issues"))
}

pub fn config_path() -> PathBuf {
    data_root().join("config.yaml")
}

pub fn preferences_path() -> PathBuf {
    data_root().join("preferences.json")
}

pub fn recents_path() -> PathBuf {
    data_root().join("recents.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_data_root_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(ROOT_ENV, "/custom/path/issues") };
        assert_eq!(data_root(), PathBuf::from("/custom/path/issues"));
        assert_eq!(
            recents_path(),
            PathBuf::from("/custom/path/issues/recents.json")
        );
        assert_eq!(
            preferences_path(),
            PathBuf::from("/custom/path/issues/preferences.json")
        );
        assert_eq!(config_path(), PathBuf::from("/custom/path/issues/config.yaml"));
        unsafe { std::env::remove_var(ROOT_ENV) };
    }

    #[test]
    #[serial]
    fn test_data_root_ignores_empty_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(ROOT_ENV, "") };
        assert_ne!(data_root(), PathBuf::from(""));
        unsafe { std::env::remove_var(ROOT_ENV) };
    }
}
