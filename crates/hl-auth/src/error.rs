use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `hl auth login`")]
    NotAuthenticated,

    #[error("not signed in as admin: run `hl admin login`")]
    NotAdmin,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}
