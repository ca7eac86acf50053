//! Shared HTTP response helpers.
//!
//! Every endpoint funnels its response through [`check_response`] so status
//! classification and message extraction happen in one place.

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise an [`ApiError`]
/// built from the status and the body's `message` / `error` field.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), extract_message(&body)))
}

/// Pull a human-readable message out of an error body.
///
/// Prefers `message`, then `error`; blank values are ignored.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|key| {
        value[key]
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Render `key=value` pairs as a query string, skipping `None` values.
pub fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let rendered: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if rendered.is_empty() {
        String::new()
    } else {
        format!("?{}", rendered.join("&"))
    }
}
