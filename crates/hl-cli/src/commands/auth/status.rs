use hl_auth::{TokenKind, TokenStore, decode_claims};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenStatus {
    present: bool,
    source: Option<&'static str>,
    subject: Option<String>,
    expires_at: Option<String>,
    expired: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStatusOutput {
    base_url: String,
    data_dir: String,
    user: TokenStatus,
    admin: TokenStatus,
}

/// Local view only; nothing is sent to the backend.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &AuthStatusOutput {
            base_url: ctx.sync.client().base_url().to_string(),
            data_dir: ctx.credentials.data_dir().display().to_string(),
            user: token_status(ctx, TokenKind::User),
            admin: token_status(ctx, TokenKind::Admin),
        },
        flags.format,
    )
}

fn token_status(ctx: &AppContext, kind: TokenKind) -> TokenStatus {
    let Some(token) = ctx.credentials.load(kind) else {
        return TokenStatus {
            present: false,
            source: None,
            subject: None,
            expires_at: None,
            expired: None,
        };
    };
    let claims = decode_claims(&token).ok();
    TokenStatus {
        present: true,
        source: ctx.credentials.detect_source(kind),
        subject: claims.as_ref().and_then(|c| c.subject.clone()),
        expires_at: claims.as_ref().map(|c| c.expires_at.to_rfc3339()),
        expired: claims.as_ref().map(hl_auth::TokenClaims::is_expired),
    }
}
