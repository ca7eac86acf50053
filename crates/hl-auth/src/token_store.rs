use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "hyperlocal-cli";

/// The two bearer tokens the client keeps between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End-user session token, attached to `/api/communities` and `/api/v1/users` calls.
    User,
    /// Super-admin token, attached to `/api/v1/admin` calls.
    Admin,
}

impl TokenKind {
    const fn keyring_user(self) -> &'static str {
        match self {
            Self::User => "auth-token",
            Self::Admin => "admin-token",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::User => "credentials",
            Self::Admin => "admin-credentials",
        }
    }

    /// Environment variable consulted after the keyring.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::User => "HYPERLOCAL_AUTH__TOKEN",
            Self::Admin => "HYPERLOCAL_AUTH__ADMIN_TOKEN",
        }
    }
}

/// Persistent storage for bearer tokens.
///
/// The HTTP layer reads through this trait to attach `Authorization`
/// headers and clears the user token when the backend answers 401.
pub trait TokenStore: Send + Sync {
    fn load(&self, kind: TokenKind) -> Option<String>;

    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the token cannot be persisted.
    fn store(&self, kind: TokenKind, token: &str) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if a persisted token cannot be removed.
    fn delete(&self, kind: TokenKind) -> Result<(), AuthError>;
}

/// Token store backed by the OS keychain with a `0600` file fallback.
///
/// Load priority: keyring → `HYPERLOCAL_AUTH__*` env → file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    data_dir: PathBuf,
    use_keyring: bool,
    keyring_service: String,
}

impl CredentialStore {
    /// Files land in `data_dir`; the keyring is skipped when `use_keyring` is false.
    ///
    /// The keyring service defaults to `"hyperlocal-cli"`; override with
    /// `HYPERLOCAL_KEYRING_SERVICE` to keep test runs away from real credentials.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, use_keyring: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            use_keyring,
            keyring_service: std::env::var("HYPERLOCAL_KEYRING_SERVICE")
                .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string()),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Which tier a token would currently be read from (for status display).
    #[must_use]
    pub fn detect_source(&self, kind: TokenKind) -> Option<&'static str> {
        if self.load_keyring(kind).is_some() {
            return Some("keyring");
        }
        if std::env::var(kind.env_var()).is_ok_and(|t| !t.is_empty()) {
            return Some("env");
        }
        if self.load_file(kind).is_some() {
            return Some("file");
        }
        None
    }

    fn entry(&self, kind: TokenKind) -> Option<keyring::Entry> {
        if !self.use_keyring {
            return None;
        }
        match keyring::Entry::new(&self.keyring_service, kind.keyring_user()) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn load_keyring(&self, kind: TokenKind) -> Option<String> {
        self.entry(kind)
            .and_then(|entry| entry.get_password().ok())
            .filter(|token| !token.is_empty())
    }

    fn credentials_path(&self, kind: TokenKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    fn store_file(&self, kind: TokenKind, token: &str) -> Result<(), AuthError> {
        let path = self.credentials_path(kind);
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            AuthError::TokenStoreError(format!("mkdir {}: {e}", self.data_dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.data_dir, fs::Permissions::from_mode(0o700))
            {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.data_dir.display());
            }
        }

        fs::write(&path, token)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self, kind: TokenKind) -> Option<String> {
        fs::read_to_string(self.credentials_path(kind))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl TokenStore for CredentialStore {
    fn load(&self, kind: TokenKind) -> Option<String> {
        if let Some(token) = self.load_keyring(kind) {
            return Some(token);
        }

        if let Ok(token) = std::env::var(kind.env_var())
            && !token.is_empty()
        {
            return Some(token);
        }

        self.load_file(kind)
    }

    fn store(&self, kind: TokenKind, token: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.entry(kind) {
            match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        self.store_file(kind, token)
    }

    fn delete(&self, kind: TokenKind) -> Result<(), AuthError> {
        // Keyring entry may not exist; only the file removal is fallible.
        if let Some(entry) = self.entry(kind) {
            let _ = entry.delete_credential();
        }

        let path = self.credentials_path(kind);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}

/// Process-local token store, for tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<TokenKind, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(kind: TokenKind, token: &str) -> Self {
        let store = Self::new();
        store
            .tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, kind: TokenKind) -> Option<String> {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .cloned()
    }

    fn store(&self, kind: TokenKind, token: &str) -> Result<(), AuthError> {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, token.to_string());
        Ok(())
    }

    fn delete(&self, kind: TokenKind) -> Result<(), AuthError> {
        self.tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&kind);
        Ok(())
    }
}
