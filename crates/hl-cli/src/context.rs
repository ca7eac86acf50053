use std::sync::Arc;

use anyhow::Context;
use hl_auth::{AuthError, CredentialStore};
use hl_config::HlConfig;
use hl_core::entities::User;
use hl_sync::SyncContext;

/// Everything a command handler needs: config, stored credentials and the
/// sync layer built on top of them.
pub struct AppContext {
    pub config: HlConfig,
    pub credentials: Arc<CredentialStore>,
    pub sync: SyncContext,
}

impl AppContext {
    pub fn init(config: HlConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_data_dir().context(
            "cannot determine a data directory; set HYPERLOCAL_STORAGE__DATA_DIR",
        )?;
        let credentials = Arc::new(CredentialStore::new(data_dir, config.storage.use_keyring));
        let sync = SyncContext::from_config(&config, credentials.clone())
            .context("failed to build API client")?;
        tracing::debug!(base_url = sync.client().base_url(), "context ready");
        Ok(Self {
            config,
            credentials,
            sync,
        })
    }

    /// Rebuild the session from the stored user token, or fail with a hint to log in.
    pub async fn require_user(&self) -> anyhow::Result<User> {
        self.sync
            .restore()
            .await?
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}
