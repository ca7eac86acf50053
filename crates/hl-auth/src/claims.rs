use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Unverified view of a backend-issued JWT.
///
/// The client never checks signatures; the backend does that on every call.
/// These claims only drive local status display and early expiry warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// `sub`, which the backend sets to the account email.
    pub subject: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

impl TokenClaims {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Whether the token expires within `buffer_secs` seconds.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        (self.expires_at - Utc::now()).num_seconds() < buffer_secs
    }
}

/// Decode the payload segment of a JWT without signature validation.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the JWT format is invalid or the `exp`
/// claim is missing or cannot be parsed.
pub fn decode_claims(jwt: &str) -> Result<TokenClaims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;

    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;

    Ok(TokenClaims {
        subject: value["sub"].as_str().map(str::to_string),
        issued_at: value["iat"].as_i64().and_then(|iat| DateTime::from_timestamp(iat, 0)),
        expires_at,
    })
}

/// Decode only the JWT `exp` claim.
///
/// # Errors
///
/// Same as [`decode_claims`].
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    decode_claims(jwt).map(|claims| claims.expires_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(part: &str) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(part)
    }

    fn make_jwt(payload: &str) -> String {
        format!("{}.{}.{}", encode(r#"{"alg":"HS256"}"#), encode(payload), encode("sig"))
    }

    #[test]
    fn decodes_subject_and_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(
            r#"{{"sub":"sarah@example.com","iat":1700000000,"exp":{exp}}}"#
        ));
        let claims = decode_claims(&jwt).unwrap();
        assert_eq!(claims.subject.as_deref(), Some("sarah@example.com"));
        assert_eq!(claims.expires_at.timestamp(), exp);
        assert_eq!(claims.issued_at.map(|t| t.timestamp()), Some(1_700_000_000));
        assert!(!claims.is_expired());
        assert!(!claims.is_near_expiry(60));
        assert!(claims.is_near_expiry(7200));
    }

    #[test]
    fn expired_token_reports_expired() {
        let exp = Utc::now().timestamp() - 10;
        let expiry = decode_expiry(&make_jwt(&format!(r#"{{"exp":{exp}}}"#))).unwrap();
        assert!(expiry < Utc::now());
    }

    #[test]
    fn rejects_non_jwt() {
        let err = decode_claims("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn rejects_missing_exp() {
        let err = decode_claims(&make_jwt(r#"{"sub":"x"}"#)).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_claims("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
