//! API Error Type
//!
//! The backend signals failure with a non-2xx status and/or an `error`
//! field in the JSON body; both map to `ApiError::Server` carrying the
//! backend's message verbatim. Transport and decode failures get generic
//! user-facing text.

use std::fmt;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Message reported by the backend, shown to the user verbatim
    Server(String),
    /// Fetch failed before a response arrived
    Network(String),
    /// Response arrived but was not the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server(msg) => f.write_str(msg),
            ApiError::Network(_) => f.write_str("Network error. Please try again."),
            ApiError::Decode(_) => f.write_str("Unexpected response from the server."),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

fn error_field(value: &serde_json::Value) -> Option<String> {
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Read a JSON body, treating a non-2xx status or an `error` field as failure.
pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(msg) = error_field(&value) {
        return Err(ApiError::Server(msg));
    }
    if !ok {
        // some endpoints report failures through a `message` field instead
        let msg = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        return Err(ApiError::Server(msg));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`decode`] but discards the body; tolerates empty 2xx responses
/// such as the 204 returned by DELETE endpoints.
pub(crate) async fn expect_ok(resp: Response) -> Result<(), ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if text.trim().is_empty() {
        return if ok {
            Ok(())
        } else {
            Err(ApiError::Server(format!("Request failed with status {status}")))
        };
    }
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(msg) = error_field(&value) {
        return Err(ApiError::Server(msg));
    }
    if !ok {
        let msg = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        return Err(ApiError::Server(msg));
    }
    Ok(())
}
