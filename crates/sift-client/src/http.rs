//! Shared HTTP response helpers for backend calls.
//!
//! Centralizes status checks and error-body parsing so the endpoint methods
//! stay focused on building requests and mapping responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ApiError::Api`] carrying the body's `detail` message when the
/// body is JSON and has one.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

/// Decode a success response body as JSON.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `; `.
/// Empty strings, other shapes, and non-JSON bodies yield `None`.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
