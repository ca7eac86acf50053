//! # hl-auth
//!
//! Bearer token storage for the Hyperlocal client.
//!
//! Two independent tokens are kept: the end-user session token and the
//! super-admin token. Each lives in the OS keychain (`keyring`) with a
//! `0600` file fallback under the data directory. Tokens are opaque to the
//! client apart from an unverified peek at their `exp` claim.

pub mod claims;
pub mod error;
pub mod token_store;

pub use claims::{TokenClaims, decode_claims, decode_expiry};
pub use error::AuthError;
pub use token_store::{CredentialStore, MemoryTokenStore, TokenKind, TokenStore};

/// Seconds before expiry at which a stored token is treated as stale.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Load a token and drop it if it is already (nearly) expired.
///
/// Tokens that cannot be decoded are returned unchanged; the backend is the
/// authority on validity.
#[must_use]
pub fn load_fresh(store: &dyn TokenStore, kind: TokenKind) -> Option<String> {
    let token = store.load(kind)?;
    match decode_claims(&token) {
        Ok(claims) if claims.is_near_expiry(EXPIRY_BUFFER_SECS) => {
            tracing::warn!(
                expires_at = %claims.expires_at,
                ?kind,
                "stored token expires within {EXPIRY_BUFFER_SECS}s; sign in again",
            );
            None
        }
        _ => Some(token),
    }
}
