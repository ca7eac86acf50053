//! # hl-client
//!
//! Typed REST client for the Hyperlocal backend.
//!
//! Endpoint groups live in their own modules as `impl ApiClient` blocks:
//! - [`auth`]: registration, login, profile wizard, verification status
//! - [`community`]: the caller's communities, membership and community admin
//! - [`admin`]: super-admin user verification
//! - [`admin_community`]: super-admin community lifecycle
//!
//! User endpoints carry the stored user token; `/api/v1/admin/*` endpoints
//! carry the admin token. A 401 answer clears the stored user token, and the
//! admin token as well when that was the one sent.

pub mod admin;
pub mod admin_community;
pub mod auth;
pub mod community;

mod error;
mod http;
mod upload;

pub use admin::UserFilter;
pub use admin_community::CommunityFilter;
pub use auth::ProfileUpdate;
pub use community::{CommunityUpdate, NewCommunity};
pub use error::{ApiError, ErrorCategory};
pub use upload::Upload;

use std::sync::Arc;

use hl_auth::{TokenKind, TokenStore};
use hl_config::ApiConfig;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// HTTP client for the Hyperlocal REST API.
///
/// Cheap to clone; clones share the connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::unknown(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.origin().to_string(),
            tokens,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str, auth: Option<TokenKind>) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match auth.and_then(|kind| hl_auth::load_fresh(self.tokens.as_ref(), kind)) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        auth: Option<TokenKind>,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = builder.send().await?;
        match check_response(resp).await {
            Ok(resp) => Ok(resp),
            Err(error) => {
                if error.status == 401 {
                    self.clear_rejected(auth);
                }
                Err(error)
            }
        }
    }

    /// The user token goes on every 401; the admin token too when it was the one sent.
    fn clear_rejected(&self, auth: Option<TokenKind>) {
        let mut kinds = vec![TokenKind::User];
        if auth == Some(TokenKind::Admin) {
            kinds.push(TokenKind::Admin);
        }
        for kind in kinds {
            tracing::info!(?kind, "server rejected credentials; clearing stored token");
            if let Err(e) = self.tokens.delete(kind) {
                tracing::warn!(error = %e, "failed to clear token after 401");
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Option<TokenKind>,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.execute(self.request(Method::GET, path, auth), auth).await?;
        Ok(resp.json().await?)
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Option<TokenKind>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, path, "send");
        let builder = self.request(method, path, auth).json(body);
        let resp = self.execute(builder, auth).await?;
        Ok(resp.json().await?)
    }

    /// Send a body-less request and discard the response body.
    async fn send_empty(
        &self,
        method: Method,
        path: &str,
        auth: Option<TokenKind>,
    ) -> Result<(), ApiError> {
        tracing::debug!(%method, path, "send");
        self.execute(self.request(method, path, auth), auth).await?;
        Ok(())
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, path, "multipart");
        let auth = Some(TokenKind::User);
        let builder = self.request(method, path, auth).multipart(form);
        let resp = self.execute(builder, auth).await?;
        Ok(resp.json().await?)
    }
}

/// Percent-encode a single path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_auth::MemoryTokenStore;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(segment("42"), "42");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
