//! Where the client keeps its two tokens.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for the credential fallback files.
    /// Empty means `~/.hyperlocal`.
    #[serde(default)]
    pub data_dir: String,

    /// Prefer the OS keychain for tokens, falling back to files.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,
}

impl StorageConfig {
    /// Resolved data directory, or `None` if no home directory is known.
    #[must_use]
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        if self.data_dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".hyperlocal"))
        } else {
            Some(PathBuf::from(&self.data_dir))
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            use_keyring: default_use_keyring(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = StorageConfig {
            data_dir: "/tmp/hl-data".into(),
            use_keyring: false,
        };
        assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/tmp/hl-data")));
    }

    #[test]
    fn default_data_dir_is_under_home() {
        let config = StorageConfig::default();
        if let Some(dir) = config.resolved_data_dir() {
            assert!(dir.ends_with(".hyperlocal"));
        }
        assert!(config.use_keyring);
    }
}
