use hl_auth::AuthError;
use hl_client::ApiError;
use hl_core::errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("no signed-in user")]
    NotSignedIn,
}

impl SyncError {
    /// Message suitable for an end-user notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
